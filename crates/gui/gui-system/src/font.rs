//! Fonts and the (family, size) font cache
//!
//! Two kinds of face are supported:
//!
//! - outline fonts loaded from `<font_dir>/<family>.ttf` and rasterised with
//!   `ab_glyph` (anti-aliased, blended onto the canvas)
//! - the `embedded-graphics` ASCII mono fonts, for families explicitly
//!   registered with [`FontCache::register_builtin`]
//!
//! Handles are shared as [`FontHandle`] (`Rc<Font>`); the cache never evicts,
//! so a handle stays valid for as long as anyone holds it.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ab_glyph::{Font as _, FontArc, GlyphId, PxScale, ScaleFont as _};
use embedded_graphics::{
    mono_font::{ascii, MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Baseline, Text},
};

use crate::canvas::{draw_infallible, Canvas};
use crate::error::{GuiError, Result};
use crate::text::TextMeasure;

/// Shared, immutable font handle.
pub type FontHandle = Rc<Font>;

/// Built-in faces.
const BUILTIN_FACES: [&MonoFont<'static>; 13] = [
    &ascii::FONT_4X6,
    &ascii::FONT_5X7,
    &ascii::FONT_5X8,
    &ascii::FONT_6X9,
    &ascii::FONT_6X10,
    &ascii::FONT_6X12,
    &ascii::FONT_6X13,
    &ascii::FONT_7X13,
    &ascii::FONT_7X14,
    &ascii::FONT_8X13,
    &ascii::FONT_9X15,
    &ascii::FONT_9X18,
    &ascii::FONT_10X20,
];

/// Vertical font metrics, in pixels. Both values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the top of the line to the baseline
    pub ascent: u32,
    /// Distance from the baseline to the bottom of the line
    pub descent: u32,
}

enum Face {
    Mono(&'static MonoFont<'static>),
    Outline { font: FontArc, scale: PxScale },
}

/// A rasterisable font at a fixed pixel size.
pub struct Font {
    size: u32,
    face: Face,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.face {
            Face::Mono(_) => "builtin",
            Face::Outline { .. } => "outline",
        };
        f.debug_struct("Font")
            .field("size", &self.size)
            .field("kind", &kind)
            .finish()
    }
}

impl Font {
    /// The built-in mono face for `size`: the tallest one whose cell fits in
    /// `size` pixels, or the smallest one if none does.
    pub fn builtin(size: u32) -> Self {
        let face = BUILTIN_FACES
            .iter()
            .copied()
            .filter(|f| f.character_size.height <= size)
            .max_by_key(|f| (f.character_size.height, f.character_size.width))
            .unwrap_or(&ascii::FONT_4X6);
        Self {
            size,
            face: Face::Mono(face),
        }
    }

    /// An outline font scaled so that one em is `size` pixels.
    pub fn outline(font: FontArc, size: u32) -> Self {
        let units_per_em = font.units_per_em().unwrap_or(1000.0);
        let px = size as f32 * font.height_unscaled() / units_per_em;
        Self {
            size,
            face: Face::Outline {
                font,
                scale: PxScale::from(px),
            },
        }
    }

    /// Requested pixel size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns `true` for built-in mono faces.
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Mono(_))
    }

    /// Ascent and descent.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn metrics(&self) -> FontMetrics {
        match &self.face {
            Face::Mono(face) => FontMetrics {
                ascent: face.baseline,
                descent: face.character_size.height.saturating_sub(face.baseline),
            },
            Face::Outline { font, scale } => {
                let scaled = font.as_scaled(*scale);
                FontMetrics {
                    ascent: scaled.ascent().ceil().max(0.0) as u32,
                    descent: (-scaled.descent()).ceil().max(0.0) as u32,
                }
            }
        }
    }

    /// Offset of the first inked pixel from the line's top-left corner.
    ///
    /// Mono faces always report `(0, 0)`. For outline faces this is the
    /// side bearing of the first glyph and the gap between the top of the
    /// line and the tallest glyph, which is what lets a label center on its
    /// visible ink rather than on the font's full ascent.
    #[allow(clippy::cast_possible_truncation)]
    pub fn ink_offset(&self, text: &str) -> Point {
        let Face::Outline { font, scale } = &self.face else {
            return Point::zero();
        };
        let ascent = font.as_scaled(*scale).ascent();
        let mut min: Option<(f32, f32)> = None;
        for_each_glyph(font, *scale, text, 0.0, ascent, |glyph| {
            if let Some(outlined) = font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                min = Some(match min {
                    Some((x, y)) => (x.min(b.min.x), y.min(b.min.y)),
                    None => (b.min.x, b.min.y),
                });
            }
        });
        min.map_or(Point::zero(), |(x, y)| {
            Point::new(x.floor() as i32, y.floor() as i32)
        })
    }

    /// Draw `text` with the top of its line at `top_left`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn draw(&self, canvas: &mut Canvas, text: &str, top_left: Point, color: Rgb888) {
        match &self.face {
            Face::Mono(face) => {
                let style = MonoTextStyle::new(face, color);
                draw_infallible(
                    Text::with_baseline(text, top_left, style, Baseline::Top)
                        .draw(canvas)
                        .map(|_| ()),
                );
            }
            Face::Outline { font, scale } => {
                let baseline = top_left.y as f32 + font.as_scaled(*scale).ascent();
                for_each_glyph(font, *scale, text, top_left.x as f32, baseline, |glyph| {
                    let Some(outlined) = font.outline_glyph(glyph) else {
                        return;
                    };
                    let bounds = outlined.px_bounds();
                    let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
                    outlined.draw(|x, y, coverage| {
                        canvas.blend_pixel(ox + x as i32, oy + y as i32, color, coverage);
                    });
                });
            }
        }
    }
}

impl TextMeasure for Font {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn text_width(&self, text: &str) -> u32 {
        match &self.face {
            Face::Mono(face) => {
                let n = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
                if n == 0 {
                    return 0;
                }
                n.saturating_mul(face.character_size.width)
                    .saturating_add((n - 1).saturating_mul(face.character_spacing))
            }
            Face::Outline { font, scale } => {
                let mut caret = 0.0_f32;
                for_each_glyph(font, *scale, text, 0.0, 0.0, |glyph| {
                    caret = glyph.position.x + font.as_scaled(*scale).h_advance(glyph.id);
                });
                caret.ceil().max(0.0) as u32
            }
        }
    }

    fn line_height(&self) -> u32 {
        let m = self.metrics();
        m.ascent + m.descent
    }
}

/// Lay out `text` on one line, handing each positioned glyph to `f`.
fn for_each_glyph(
    font: &FontArc,
    scale: PxScale,
    text: &str,
    start_x: f32,
    baseline: f32,
    mut f: impl FnMut(ab_glyph::Glyph),
) {
    let scaled = font.as_scaled(scale);
    let mut caret = start_x;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        f(id.with_scale_and_position(scale, ab_glyph::point(caret, baseline)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
}

/// Lazily populated (family, size) → font map.
///
/// ```
/// use gui_system::font::FontCache;
/// use std::rc::Rc;
///
/// let mut fonts = FontCache::builtin_only();
/// fonts.register_builtin("OpenSans-Regular");
/// let a = fonts.get_font("OpenSans-Regular", 17).unwrap();
/// let b = fonts.get_font("OpenSans-Regular", 17).unwrap();
/// assert!(Rc::ptr_eq(&a, &b));
/// assert!(fonts.get_font("Unregistered", 17).is_err());
/// ```
#[derive(Default)]
pub struct FontCache {
    font_dir: Option<PathBuf>,
    builtin: HashSet<String>,
    files: HashMap<String, FontArc>,
    fonts: HashMap<(String, u32), FontHandle>,
}

impl fmt::Debug for FontCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontCache")
            .field("font_dir", &self.font_dir)
            .field("builtin", &self.builtin)
            .field("loaded", &self.fonts.len())
            .finish()
    }
}

impl FontCache {
    /// Cache that loads `<font_dir>/<family>.ttf`.
    pub fn new(font_dir: impl Into<PathBuf>) -> Self {
        Self {
            font_dir: Some(font_dir.into()),
            ..Self::default()
        }
    }

    /// Cache with no font directory; only registered built-in families load.
    pub fn builtin_only() -> Self {
        Self::default()
    }

    /// Directory outline fonts are loaded from, if any.
    pub fn font_dir(&self) -> Option<&Path> {
        self.font_dir.as_deref()
    }

    /// Serve `family` from the built-in mono fonts instead of a `.ttf` file.
    pub fn register_builtin(&mut self, family: impl Into<String>) -> &mut Self {
        self.builtin.insert(family.into());
        self
    }

    /// Number of distinct (family, size) entries loaded so far.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Returns `true` if nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Get the font for `(family, size)`, loading it on first use.
    pub fn get_font(&mut self, family: &str, size: u32) -> Result<FontHandle> {
        if let Some(font) = self.fonts.get(&(family.to_owned(), size)) {
            return Ok(Rc::clone(font));
        }
        if size == 0 {
            return Err(GuiError::configuration(format!(
                "font `{family}` requested at size 0"
            )));
        }

        let font = if self.builtin.contains(family) {
            Font::builtin(size)
        } else {
            Font::outline(self.load_file(family)?, size)
        };
        tracing::debug!(family, size, builtin = font.is_builtin(), "font loaded");

        let handle = Rc::new(font);
        self.fonts
            .insert((family.to_owned(), size), Rc::clone(&handle));
        Ok(handle)
    }

    fn load_file(&mut self, family: &str) -> Result<FontArc> {
        if let Some(font) = self.files.get(family) {
            return Ok(font.clone());
        }
        let Some(dir) = &self.font_dir else {
            return Err(GuiError::resource(
                family,
                PathBuf::new(),
                "no font directory configured and family is not built-in",
            ));
        };
        let path = dir.join(format!("{family}.ttf"));
        let bytes = std::fs::read(&path).map_err(|e| GuiError::resource(family, &path, e))?;
        let font =
            FontArc::try_from_vec(bytes).map_err(|e| GuiError::resource(family, &path, e))?;
        self.files.insert(family.to_owned(), font.clone());
        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_picks_tallest_fitting_face() {
        let font = Font::builtin(17);
        // 9x15 is the tallest cell not exceeding 17px
        assert_eq!(font.line_height(), 15);
        assert_eq!(font.text_width("abc"), 27);

        assert_eq!(Font::builtin(20).line_height(), 20);
        assert_eq!(Font::builtin(100).line_height(), 20);
        assert_eq!(Font::builtin(3).line_height(), 6);
    }

    #[test]
    fn test_builtin_metrics_sum_to_line_height() {
        for size in [6, 10, 13, 18, 20] {
            let font = Font::builtin(size);
            let m = font.metrics();
            assert_eq!(m.ascent + m.descent, font.line_height());
            assert_eq!(font.ink_offset("Scan"), Point::zero());
        }
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        assert_eq!(Font::builtin(18).text_width(""), 0);
    }

    #[test]
    fn test_builtin_draw_marks_pixels() {
        let font = Font::builtin(10);
        let mut canvas = Canvas::new(40, 20);
        font.draw(&mut canvas, "X", Point::new(2, 2), Rgb888::WHITE);
        let lit = canvas
            .image()
            .pixels()
            .filter(|p| p.0 == [255, 255, 255])
            .count();
        assert!(lit > 0);
        // Nothing drawn above the requested top edge
        for x in 0..40 {
            assert_eq!(canvas.pixel(x, 1), Some(Rgb888::BLACK));
        }
    }

    #[test]
    fn test_cache_keys_on_size() {
        let mut cache = FontCache::builtin_only();
        cache.register_builtin("Body");
        let a = cache.get_font("Body", 17).unwrap();
        let b = cache.get_font("Body", 18).unwrap();
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_unregistered_family_without_dir_fails() {
        let mut cache = FontCache::builtin_only();
        let err = cache.get_font("Body", 17).unwrap_err();
        assert!(matches!(err, GuiError::Resource { ref name, .. } if name == "Body"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut cache = FontCache::builtin_only();
        cache.register_builtin("Body");
        assert!(matches!(
            cache.get_font("Body", 0),
            Err(GuiError::Configuration(_))
        ));
    }
}
