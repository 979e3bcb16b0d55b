//! Wrapped body text
//!
//! A [`TextArea`] lays its text out once, at construction. With a
//! supersampling factor above 1 the layout runs at `factor` times the size
//! (font, box, paddings and line spacing all scaled); the text is drawn onto
//! an offscreen canvas at that size, downscaled with a Lanczos filter,
//! sharpened, and the result kept for `render` to paste.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use gui_system::prelude::*;
use image::{imageops, RgbImage};

/// 3x3 sharpen kernel applied after downscaling; normalised by its sum (16).
const SHARPEN_KERNEL: [f32; 9] = [-2.0, -2.0, -2.0, -2.0, 32.0, -2.0, -2.0, -2.0, -2.0];

/// Text area construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaConfig {
    /// Text to show
    pub text: String,
    /// Font family
    pub font_name: String,
    /// Font size at native resolution
    pub font_size: u32,
    /// Center lines; otherwise left-align at `EDGE_PADDING`
    pub centered: bool,
    /// Text color; `None` uses the theme's font color
    pub font_color: Option<Rgb888>,
    /// Fill behind the text; `None` uses the theme background
    pub background: Option<Rgb888>,
    /// Supersampling factor; `None` means the default of 2, `Some(1)` disables it
    pub supersampling: Option<u32>,
}

impl Default for TextAreaConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_name: BODY_FONT_NAME.to_owned(),
            font_size: BODY_FONT_SIZE,
            centered: true,
            font_color: None,
            background: None,
            supersampling: None,
        }
    }
}

impl TextAreaConfig {
    /// Centered body text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Override the font.
    pub fn font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    /// Center or left-align.
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Override text and background colors.
    pub fn colors(mut self, font_color: Rgb888, background: Rgb888) -> Self {
        self.font_color = Some(font_color);
        self.background = Some(background);
        self
    }

    /// Override the supersampling factor.
    pub fn supersampling(mut self, factor: u32) -> Self {
        self.supersampling = Some(factor);
        self
    }
}

/// Positioned block of wrapped text.
#[derive(Debug)]
pub struct TextArea {
    bounds: Rectangle,
    block: TextBlock,
    factor: u32,
    font: FontHandle,
    font_color: Rgb888,
    background: Rgb888,
    downsampled: Option<RgbImage>,
}

impl TextArea {
    /// Lay out `config.text` inside `bounds`.
    ///
    /// Fails with [`GuiError::Configuration`] for a zero supersampling
    /// factor, [`GuiError::Resource`] if the font cannot be loaded and
    /// [`GuiError::LayoutOverflow`] if the text does not fit.
    pub fn new(config: TextAreaConfig, bounds: Rectangle, res: &mut Resources) -> Result<Self> {
        let factor = config
            .supersampling
            .unwrap_or(DEFAULT_SUPERSAMPLING_FACTOR);
        if factor == 0 {
            return Err(GuiError::configuration(
                "text area supersampling factor must be at least 1",
            ));
        }

        let font = res
            .fonts
            .get_font(&config.font_name, config.font_size.saturating_mul(factor))?;
        let params = LayoutParams::new(
            bounds.size.width.saturating_mul(factor),
            bounds.size.height.saturating_mul(factor),
            config.centered,
        )
        .with_edge_padding(EDGE_PADDING * factor)
        .with_overflow_tolerance(2 * COMPONENT_PADDING * factor)
        .with_line_spacing((config.font_size / 4) * factor);
        let block = layout(&config.text, &*font, params)?;

        let mut area = Self {
            bounds,
            block,
            factor,
            font,
            font_color: config.font_color.unwrap_or(res.theme.font_color),
            background: config.background.unwrap_or(res.theme.background),
            downsampled: None,
        };
        if factor > 1 {
            area.downsampled = Some(area.supersample());
        }
        tracing::debug!(
            lines = area.block.lines.len(),
            factor,
            bounds = ?area.bounds,
            "text area laid out"
        );
        Ok(area)
    }

    /// The laid-out block, in supersampled coordinates.
    pub fn block(&self) -> &TextBlock {
        &self.block
    }

    /// Active supersampling factor.
    pub fn supersampling_factor(&self) -> u32 {
        self.factor
    }

    /// Area the text occupies on the canvas.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn draw_lines(&self, canvas: &mut Canvas, origin: Point) {
        for (i, line) in self.block.lines.iter().enumerate() {
            let top_left = origin + Point::new(line.x, self.block.line_y(i));
            self.font.draw(canvas, &line.text, top_left, self.font_color);
        }
    }

    fn supersample(&self) -> RgbImage {
        let size = self.bounds.size;
        let mut scratch = Canvas::filled(
            size.width.saturating_mul(self.factor),
            size.height.saturating_mul(self.factor),
            self.background,
        );
        self.draw_lines(&mut scratch, Point::zero());
        let resized = imageops::resize(
            scratch.image(),
            size.width,
            size.height,
            imageops::FilterType::Lanczos3,
        );
        sharpen(&resized)
    }
}

/// Sharpen with edge pixels extended, so the border is filtered too.
fn sharpen(image: &RgbImage) -> RgbImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return image.clone();
    }
    let padded = RgbImage::from_fn(w + 2, h + 2, |x, y| {
        let sx = x.saturating_sub(1).min(w - 1);
        let sy = y.saturating_sub(1).min(h - 1);
        *image.get_pixel(sx, sy)
    });
    let filtered = imageops::filter3x3(&padded, &SHARPEN_KERNEL);
    imageops::crop_imm(&filtered, 1, 1, w, h).to_image()
}

impl Renderable for TextArea {
    fn render(&self, canvas: &mut Canvas) {
        match &self.downsampled {
            Some(image) => canvas.paste(image, self.bounds.top_left),
            None => {
                canvas.fill_rect(self.bounds, self.background);
                self.draw_lines(canvas, self.bounds.top_left);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(config: TextAreaConfig) -> Result<TextArea> {
        let mut res = Resources::builtin(Theme::default());
        TextArea::new(
            config,
            Rectangle::new(Point::new(0, 48), Size::new(240, 192)),
            &mut res,
        )
    }

    #[test]
    fn test_default_factor_scales_layout() {
        let text = area(TextAreaConfig::new("Hello")).unwrap();
        assert_eq!(text.supersampling_factor(), 2);
        // 17 * 2 = 34 -> tallest built-in cell is 20px
        assert_eq!(text.block().line_height, 20);
        assert_eq!(text.block().line_spacing, (17 / 4) * 2);
    }

    #[test]
    fn test_zero_factor_rejected() {
        let err = area(TextAreaConfig::new("Hello").supersampling(0)).unwrap_err();
        assert!(matches!(err, GuiError::Configuration(_)));
    }

    #[test]
    fn test_overflow_fails_construction() {
        let mut res = Resources::builtin(Theme::default());
        let long = "word ".repeat(200);
        let err = TextArea::new(
            TextAreaConfig::new(long.trim_end()),
            Rectangle::new(Point::zero(), Size::new(100, 40)),
            &mut res,
        )
        .unwrap_err();
        assert!(matches!(err, GuiError::LayoutOverflow { .. }));
    }

    #[test]
    fn test_render_stays_in_bounds() {
        for factor in [1, 2, 3] {
            let text = area(
                TextAreaConfig::new("The quick brown fox jumps over the lazy dog")
                    .colors(Rgb888::WHITE, Rgb888::new(0, 0, 80))
                    .supersampling(factor),
            )
            .unwrap();
            let mut canvas = Canvas::filled(240, 240, Rgb888::RED);
            text.render(&mut canvas);

            // top bar region untouched
            assert_eq!(canvas.pixel(120, 47), Some(Rgb888::RED), "factor {factor}");
            // corner of the area takes the background
            assert_eq!(canvas.pixel(0, 48), Some(Rgb888::new(0, 0, 80)), "factor {factor}");
            // some text was drawn
            let bright = canvas
                .image()
                .pixels()
                .filter(|p| p.0[0] > 128 && p.0[1] > 128)
                .count();
            assert!(bright > 0, "factor {factor}");
        }
    }

    #[test]
    fn test_sharpen_keeps_flat_regions() {
        let flat = RgbImage::from_pixel(5, 4, image::Rgb([0, 0, 80]));
        assert_eq!(sharpen(&flat), flat);
    }

    #[test]
    fn test_render_is_idempotent() {
        let text = area(TextAreaConfig::new("Idempotent rendering")).unwrap();
        let mut a = Canvas::new(240, 240);
        text.render(&mut a);
        let mut b = a.clone();
        text.render(&mut b);
        assert_eq!(a, b);
    }
}
