//! In-memory RGB canvas
//!
//! The canvas is the single surface every component draws onto. It
//! implements `embedded-graphics`' [`DrawTarget`] for primitives and text, and
//! adds the two operations `embedded-graphics` has no notion of: pasting a
//! decoded image and alpha-blending a partially covered glyph pixel.
//!
//! Nothing drawn here reaches the panel until [`crate::render::Renderer::show`].

use core::convert::Infallible;
use std::path::Path;

use embedded_graphics::{
    pixelcolor::{Rgb888, RgbColor},
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle},
};
use image::{imageops, ImageFormat, ImageResult, Rgb, RgbImage};
use platform::Frame;

/// RGB888 canvas backed by an [`RgbImage`].
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Create a canvas filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb888) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, to_rgb(color)),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the backing image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas, returning the backing image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Rgb888::new(p[0], p[1], p[2]))
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgb888) {
        let rgb = to_rgb(color);
        for px in self.image.pixels_mut() {
            *px = rgb;
        }
    }

    /// Fill `area` (clipped to the canvas).
    pub fn fill_rect(&mut self, area: Rectangle, color: Rgb888) {
        draw_infallible(area.into_styled(PrimitiveStyle::with_fill(color)).draw(self));
    }

    /// Fill `area` with corners rounded to `radius`.
    pub fn fill_rounded_rect(&mut self, area: Rectangle, radius: u32, color: Rgb888) {
        let rounded = RoundedRectangle::new(area, CornerRadii::new(Size::new(radius, radius)));
        draw_infallible(rounded.into_styled(PrimitiveStyle::with_fill(color)).draw(self));
    }

    /// Copy `image` onto the canvas with its top-left corner at `top_left`.
    ///
    /// Parts that fall outside the canvas are dropped.
    pub fn paste(&mut self, image: &RgbImage, top_left: Point) {
        imageops::replace(
            &mut self.image,
            image,
            i64::from(top_left.x),
            i64::from(top_left.y),
        );
    }

    /// Blend `color` over the existing pixel at `(x, y)`.
    ///
    /// `coverage` is clamped to `0.0..=1.0`; out-of-bounds writes are ignored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb888, coverage: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some(px) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        let a = coverage.clamp(0.0, 1.0);
        let src = [color.r(), color.g(), color.b()];
        for (dst, src) in px.0.iter_mut().zip(src) {
            let mixed = f32::from(*dst) * (1.0 - a) + f32::from(src) * a;
            *dst = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Borrow the pixels as a [`Frame`] for a [`platform::DisplaySink`].
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            width: self.image.width(),
            height: self.image.height(),
            data: self.image.as_raw(),
        }
    }

    /// Write the canvas to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> ImageResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if let Some(px) = self.image.get_pixel_mut_checked(x, y) {
                *px = to_rgb(color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

fn to_rgb(color: Rgb888) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

/// Drawing onto a [`Canvas`] cannot fail.
pub(crate) fn draw_infallible(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
