//! Layout constants and runtime configuration
//!
//! The constants are tuned for the 240×240 panel; component geometry that
//! depends on the canvas size is derived from the canvas at construction.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::style::Theme;

/// Gap between the canvas edge and the outermost components.
pub const EDGE_PADDING: u32 = 8;
/// Gap between neighbouring components; also the button corner radius.
pub const COMPONENT_PADDING: u32 = 8;

/// Height of the top navigation bar.
pub const TOP_NAV_HEIGHT: u32 = 48;
/// Side length of the back/power buttons in the top bar.
pub const TOP_NAV_BUTTON_SIZE: u32 = 32;
/// Icon inset inside a top bar button.
pub const TOP_NAV_ICON_TOP_PADDING: u32 = 4;
/// Title font family for the top bar.
pub const TOP_NAV_TITLE_FONT_NAME: &str = "OpenSans-SemiBold";
/// Title font size for the top bar.
pub const TOP_NAV_TITLE_FONT_SIZE: u32 = 19;

/// Label font family for buttons.
pub const BUTTON_FONT_NAME: &str = "OpenSans-SemiBold";
/// Label font size for list buttons.
pub const BUTTON_FONT_SIZE: u32 = 18;
/// Label font size for the large grid buttons.
pub const LARGE_BUTTON_FONT_SIZE: u32 = 20;
/// Default icon inset for icon buttons.
pub const ICON_TOP_PADDING: u32 = 8;

/// Font family for body text.
pub const BODY_FONT_NAME: &str = "OpenSans-Regular";
/// Font size for body text.
pub const BODY_FONT_SIZE: u32 = 17;

/// Supersampling factor used when a text area does not specify one.
pub const DEFAULT_SUPERSAMPLING_FACTOR: u32 = 2;

/// Native panel width.
pub const CANVAS_WIDTH: u32 = 240;
/// Native panel height.
pub const CANVAS_HEIGHT: u32 = 240;

/// Runtime configuration: canvas size, resource locations and colors.
///
/// Loaded from JSON by the simulator; every field has a default so a
/// partial file is enough.
///
/// ```
/// use gui_system::config::GuiConfig;
///
/// let config = GuiConfig::default();
/// assert_eq!(config.canvas_width, 240);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Directory holding `<family>.ttf` files. `None` registers the UI's
    /// font families as built-in bitmap fonts.
    pub font_dir: Option<PathBuf>,
    /// Directory holding `<name>.png` / `<name>_selected.png` icons. `None`
    /// uses the built-in drawn icons.
    pub icon_dir: Option<PathBuf>,
    /// Palette
    pub theme: Theme,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            font_dir: None,
            icon_dir: None,
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GuiConfig =
            serde_json::from_str(r#"{ "canvas_height": 320, "font_dir": "fonts" }"#).unwrap();
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
        assert_eq!(config.canvas_height, 320);
        assert_eq!(config.font_dir, Some(PathBuf::from("fonts")));
        assert!(config.icon_dir.is_none());
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_roundtrip_preserves_theme() {
        let mut config = GuiConfig::default();
        config.theme.button_selected = embedded_graphics::pixelcolor::Rgb888::new(0, 128, 255);
        let json = serde_json::to_string(&config).unwrap();
        let back: GuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
