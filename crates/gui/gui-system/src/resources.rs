//! Shared resources handed to every component constructor.

use crate::config::{GuiConfig, BODY_FONT_NAME, BUTTON_FONT_NAME, TOP_NAV_TITLE_FONT_NAME};
use crate::font::FontCache;
use crate::icon::IconStore;
use crate::style::Theme;

/// Fonts, icons and colors.
///
/// One instance lives for the whole session; screens borrow it mutably only
/// while they are being constructed.
#[derive(Debug)]
pub struct Resources {
    /// Font cache
    pub fonts: FontCache,
    /// Icon store
    pub icons: IconStore,
    /// Palette
    pub theme: Theme,
}

impl Resources {
    /// Assemble resources from parts.
    pub fn new(fonts: FontCache, icons: IconStore, theme: Theme) -> Self {
        Self { fonts, icons, theme }
    }

    /// Build from configuration.
    ///
    /// Without a `font_dir` the UI font families are registered as built-in
    /// mono fonts; without an `icon_dir` the built-in icons are used.
    pub fn from_config(config: &GuiConfig) -> Self {
        let fonts = match &config.font_dir {
            Some(dir) => FontCache::new(dir.clone()),
            None => Self::builtin_fonts(),
        };
        let icons = match &config.icon_dir {
            Some(dir) => IconStore::from_dir(dir.clone()),
            None => IconStore::builtin(&config.theme),
        };
        tracing::info!(
            font_dir = ?config.font_dir,
            icon_dir = ?config.icon_dir,
            "resources configured"
        );
        Self::new(fonts, icons, config.theme)
    }

    /// Resources needing no files at all.
    pub fn builtin(theme: Theme) -> Self {
        Self::new(Self::builtin_fonts(), IconStore::builtin(&theme), theme)
    }

    fn builtin_fonts() -> FontCache {
        let mut fonts = FontCache::builtin_only();
        fonts
            .register_builtin(BODY_FONT_NAME)
            .register_builtin(BUTTON_FONT_NAME)
            .register_builtin(TOP_NAV_TITLE_FONT_NAME);
        fonts
    }
}
