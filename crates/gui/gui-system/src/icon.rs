//! Icon store
//!
//! Every icon comes as a pair: the normal variant and the variant shown when
//! its button is focused. Pairs are loaded once and shared.
//!
//! Two sources are supported:
//!
//! - a directory of `<name>.png` + `<name>_selected.png` files
//! - the built-in set (`back`, `power`, `check`, `cross`), drawn with
//!   `embedded-graphics` primitives in the theme's button colors

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle},
};
use image::RgbImage;

use crate::canvas::{draw_infallible, Canvas};
use crate::config::{TOP_NAV_BUTTON_SIZE, TOP_NAV_ICON_TOP_PADDING};
use crate::error::{GuiError, Result};
use crate::style::{FocusState, Theme};

/// Side length of the built-in icons: a top bar button minus its insets.
pub const BUILTIN_ICON_SIZE: u32 = TOP_NAV_BUTTON_SIZE - 2 * TOP_NAV_ICON_TOP_PADDING;

/// Normal and focused variants of one icon. Both have the same size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPair {
    /// Shown when the owning button is not focused
    pub normal: RgbImage,
    /// Shown when the owning button is focused
    pub selected: RgbImage,
}

impl IconPair {
    /// Build a pair, checking both variants have the same size.
    pub fn new(name: &str, normal: RgbImage, selected: RgbImage) -> Result<Self> {
        if normal.dimensions() != selected.dimensions() {
            return Err(GuiError::resource(
                name,
                PathBuf::new(),
                format!(
                    "normal variant is {:?} but selected variant is {:?}",
                    normal.dimensions(),
                    selected.dimensions()
                ),
            ));
        }
        Ok(Self { normal, selected })
    }

    /// The variant for `state`.
    pub fn for_state(&self, state: FocusState) -> &RgbImage {
        match state {
            FocusState::Normal => &self.normal,
            FocusState::Focused => &self.selected,
        }
    }

    /// Icon dimensions.
    pub fn size(&self) -> Size {
        let (w, h) = self.normal.dimensions();
        Size::new(w, h)
    }
}

/// Shared icon handle.
pub type IconHandle = Rc<IconPair>;

#[derive(Debug, Clone)]
enum IconSource {
    Directory(PathBuf),
    Builtin(Theme),
}

/// Loads icon pairs by name and caches them.
#[derive(Debug)]
pub struct IconStore {
    source: IconSource,
    icons: HashMap<String, IconHandle>,
}

impl IconStore {
    /// Store backed by PNG files in `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: IconSource::Directory(dir.into()),
            icons: HashMap::new(),
        }
    }

    /// Store serving the built-in icons, colored from `theme`.
    pub fn builtin(theme: &Theme) -> Self {
        Self {
            source: IconSource::Builtin(*theme),
            icons: HashMap::new(),
        }
    }

    /// Get the pair for `name`, loading it on first use.
    pub fn get_icon(&mut self, name: &str) -> Result<IconHandle> {
        if let Some(icon) = self.icons.get(name) {
            return Ok(Rc::clone(icon));
        }
        let pair = match &self.source {
            IconSource::Directory(dir) => load_pair(dir, name)?,
            IconSource::Builtin(theme) => {
                let kind = BuiltinIcon::from_name(name).ok_or_else(|| {
                    GuiError::resource(name, PathBuf::new(), "no built-in icon with this name")
                })?;
                kind.pair(theme, BUILTIN_ICON_SIZE)
            }
        };
        tracing::debug!(name, size = ?pair.size(), "icon loaded");
        let handle = Rc::new(pair);
        self.icons.insert(name.to_owned(), Rc::clone(&handle));
        Ok(handle)
    }
}

fn load_pair(dir: &Path, name: &str) -> Result<IconPair> {
    let load = |file: String| -> Result<RgbImage> {
        let path = dir.join(file);
        image::open(&path)
            .map(|img| img.to_rgb8())
            .map_err(|e| GuiError::resource(name, &path, e))
    };
    let normal = load(format!("{name}.png"))?;
    let selected = load(format!("{name}_selected.png"))?;
    IconPair::new(name, normal, selected)
}

/// Icons that can be drawn without any files.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuiltinIcon {
    /// Left-pointing arrow
    Back,
    /// Power symbol
    Power,
    /// Check mark
    Check,
    /// Diagonal cross
    Cross,
}

impl BuiltinIcon {
    /// Look up by icon name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "back" => Some(Self::Back),
            "power" => Some(Self::Power),
            "check" => Some(Self::Check),
            "cross" => Some(Self::Cross),
            _ => None,
        }
    }

    /// Draw both variants at `size` x `size`.
    pub fn pair(self, theme: &Theme, size: u32) -> IconPair {
        IconPair {
            normal: self.draw(size, theme.font_color, theme.button_background),
            selected: self.draw(size, theme.selected_font_color, theme.button_selected),
        }
    }

    fn draw(self, size: u32, color: Rgb888, background: Rgb888) -> RgbImage {
        let mut canvas = Canvas::filled(size, size, background);
        let s = px(size);
        let stroke = PrimitiveStyle::with_stroke(color, (size / 10).max(2));
        match self {
            Self::Back => {
                let tri = Triangle::new(
                    Point::new(s * 2 / 3, s / 6),
                    Point::new(s / 4, s / 2),
                    Point::new(s * 2 / 3, s * 5 / 6),
                );
                draw_infallible(tri.into_styled(PrimitiveStyle::with_fill(color)).draw(&mut canvas));
            }
            Self::Power => {
                let ring = Circle::new(Point::new(s / 6, s / 5), size * 2 / 3);
                draw_infallible(ring.into_styled(stroke).draw(&mut canvas));
                // open the ring at the top and drop the bar into the gap
                let gap = Rectangle::new(Point::new(s * 3 / 8, 0), Size::new(size / 4, size / 3));
                canvas.fill_rect(gap, background);
                let bar_w = (size / 10).max(2);
                let bar = Rectangle::new(
                    Point::new((s - px(bar_w)) / 2, s / 10),
                    Size::new(bar_w, size * 2 / 5),
                );
                canvas.fill_rect(bar, color);
            }
            Self::Check => {
                let a = Line::new(Point::new(s / 5, s / 2), Point::new(s * 2 / 5, s * 7 / 10));
                let b = Line::new(Point::new(s * 2 / 5, s * 7 / 10), Point::new(s * 4 / 5, s * 3 / 10));
                draw_infallible(a.into_styled(stroke).draw(&mut canvas));
                draw_infallible(b.into_styled(stroke).draw(&mut canvas));
            }
            Self::Cross => {
                let (lo, hi) = (s / 4, s * 3 / 4);
                let a = Line::new(Point::new(lo, lo), Point::new(hi, hi));
                let b = Line::new(Point::new(lo, hi), Point::new(hi, lo));
                draw_infallible(a.into_styled(stroke).draw(&mut canvas));
                draw_infallible(b.into_styled(stroke).draw(&mut canvas));
            }
        }
        canvas.into_image()
    }
}

fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(image: &RgbImage, color: Rgb888) -> usize {
        image
            .pixels()
            .filter(|p| p.0 == [color.r(), color.g(), color.b()])
            .count()
    }

    #[test]
    fn test_builtin_icons_use_theme_colors() {
        let theme = Theme::default();
        let mut store = IconStore::builtin(&theme);
        for name in ["back", "power", "check", "cross"] {
            let icon = store.get_icon(name).unwrap();
            assert_eq!(icon.size(), Size::new(BUILTIN_ICON_SIZE, BUILTIN_ICON_SIZE));
            assert!(count(&icon.normal, theme.font_color) > 0, "{name}");
            assert!(count(&icon.selected, theme.selected_font_color) > 0, "{name}");
            assert_eq!(icon.normal.get_pixel(0, 0).0, [0x2c, 0x2c, 0x2c]);
            assert_eq!(icon.selected.get_pixel(0, 0).0, [0xff, 0xa5, 0x00]);
        }
    }

    #[test]
    fn test_builtin_icons_are_cached() {
        let mut store = IconStore::builtin(&Theme::default());
        let a = store.get_icon("back").unwrap();
        let b = store.get_icon("back").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_unknown_builtin_is_resource_error() {
        let mut store = IconStore::builtin(&Theme::default());
        assert!(matches!(
            store.get_icon("camera"),
            Err(GuiError::Resource { .. })
        ));
    }

    #[test]
    fn test_for_state() {
        let pair = BuiltinIcon::Back.pair(&Theme::default(), 16);
        assert_eq!(pair.for_state(FocusState::Normal), &pair.normal);
        assert_eq!(pair.for_state(FocusState::Focused), &pair.selected);
    }

    #[test]
    fn test_mismatched_variants_rejected() {
        let err = IconPair::new("x", RgbImage::new(4, 4), RgbImage::new(5, 4)).unwrap_err();
        assert!(matches!(err, GuiError::Resource { .. }));
    }
}
