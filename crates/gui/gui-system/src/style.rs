//! Colors and visual state.
//!
//! # Core Types
//!
//! - [`FocusState`] - whether a focusable component is highlighted
//! - [`Theme`] - the device palette, (de)serialised as `"#rrggbb"` strings
//!
//! # Example
//!
//! ```
//! use gui_system::style::{parse_hex_color, Theme};
//! use embedded_graphics::pixelcolor::Rgb888;
//!
//! let theme = Theme::default();
//! assert_eq!(theme.button_background, Rgb888::new(0x2c, 0x2c, 0x2c));
//! assert_eq!(parse_hex_color("#ffa500"), Some(Rgb888::new(255, 165, 0)));
//! ```

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use serde::{Deserialize, Serialize};

/// Visual state of a focusable component.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FocusState {
    /// Drawn with the normal palette.
    #[default]
    Normal,
    /// Drawn highlighted; Confirm acts on this component.
    Focused,
}

impl FocusState {
    /// `Focused` when `focused` is true, else `Normal`.
    pub const fn from_focused(focused: bool) -> Self {
        if focused {
            FocusState::Focused
        } else {
            FocusState::Normal
        }
    }

    /// Returns `true` for [`FocusState::Focused`].
    pub const fn is_focused(self) -> bool {
        matches!(self, FocusState::Focused)
    }
}

/// Device palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Canvas clear color and text-area background.
    #[serde(with = "hex_color")]
    pub background: Rgb888,
    /// Top bar fill.
    #[serde(with = "hex_color")]
    pub top_nav_background: Rgb888,
    /// Button fill in the normal state.
    #[serde(with = "hex_color")]
    pub button_background: Rgb888,
    /// Button fill in the focused state.
    #[serde(with = "hex_color")]
    pub button_selected: Rgb888,
    /// Text on dark backgrounds.
    #[serde(with = "hex_color")]
    pub font_color: Rgb888,
    /// Text on a focused button.
    #[serde(with = "hex_color")]
    pub selected_font_color: Rgb888,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb888::BLACK,
            top_nav_background: Rgb888::BLACK,
            button_background: Rgb888::new(0x2c, 0x2c, 0x2c),
            button_selected: Rgb888::new(0xff, 0xa5, 0x00),
            font_color: Rgb888::new(0xfc, 0xfc, 0xfc),
            selected_font_color: Rgb888::BLACK,
        }
    }
}

/// Parse `#rrggbb`. Returns `None` for anything else.
pub fn parse_hex_color(s: &str) -> Option<Rgb888> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    let [_, r, g, b] = value.to_be_bytes();
    Some(Rgb888::new(r, g, b))
}

/// Format as `#rrggbb`.
pub fn format_hex_color(color: Rgb888) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

mod hex_color {
    use embedded_graphics::pixelcolor::Rgb888;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgb888, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hex_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb888, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s)
            .ok_or_else(|| D::Error::custom(format!("expected #rrggbb color, got {s:?}")))
    }
}
