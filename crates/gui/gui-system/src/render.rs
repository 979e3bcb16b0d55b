//! Rendering abstraction
//!
//! - [`Renderable`]: anything that draws itself onto a [`Canvas`]
//! - [`Renderer`]: owns the canvas and the [`DisplaySink`] it is flushed to
//!
//! Components draw into the canvas as often as they like; the panel only
//! changes when [`Renderer::show`] is called.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use platform::DisplaySink;

use crate::canvas::Canvas;
use crate::error::{GuiError, Result};

/// Trait for types that can be drawn onto the canvas.
///
/// Rendering only touches the component's own bounds and never flushes.
pub trait Renderable {
    /// Draw this element at its configured position.
    fn render(&self, canvas: &mut Canvas);
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn render(&self, canvas: &mut Canvas) {
        (**self).render(canvas);
    }
}

/// Canvas plus the sink it is shown on.
///
/// There is exactly one renderer per device; screens borrow it for the
/// duration of their event loop.
#[derive(Debug)]
pub struct Renderer<D> {
    canvas: Canvas,
    display: D,
}

impl<D: DisplaySink> Renderer<D> {
    /// Create a renderer with a black `size` canvas.
    pub fn new(size: Size, display: D) -> Self {
        Self {
            canvas: Canvas::new(size.width, size.height),
            display,
        }
    }

    /// Canvas dimensions.
    pub fn size(&self) -> Size {
        self.canvas.size()
    }

    /// Borrow the canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Borrow the canvas mutably.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Borrow the display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Borrow the display sink mutably.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Fill the whole canvas with `color`. Does not flush.
    pub fn clear(&mut self, color: Rgb888) {
        self.canvas.fill(color);
    }

    /// Push the canvas to the display.
    pub fn show(&mut self) -> Result<()> {
        tracing::trace!(
            width = self.canvas.width(),
            height = self.canvas.height(),
            "flushing canvas"
        );
        self.display
            .show(&self.canvas.frame())
            .map_err(|e| GuiError::Display(format!("{e:?}")))
    }

    /// Tear down, returning the display sink.
    pub fn into_display(self) -> D {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::Rectangle;
    use platform::mocks::RecordingDisplay;
    use platform::Frame;

    struct Square(Rectangle);

    impl Renderable for Square {
        fn render(&self, canvas: &mut Canvas) {
            canvas.fill_rect(self.0, Rgb888::WHITE);
        }
    }

    #[test]
    fn test_render_does_not_flush() {
        let mut renderer = Renderer::new(Size::new(8, 8), RecordingDisplay::new());
        Square(Rectangle::new(Point::new(2, 2), Size::new(2, 2))).render(renderer.canvas_mut());
        assert_eq!(renderer.display().show_count(), 0);
        renderer.show().unwrap();
        assert_eq!(renderer.display().show_count(), 1);
        let frame = renderer.display().last_frame().unwrap();
        assert_eq!(frame.rgb(2, 2), Some([255, 255, 255]));
        assert_eq!(frame.rgb(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_boxed_renderable() {
        let boxed: Box<dyn Renderable> =
            Box::new(Square(Rectangle::new(Point::zero(), Size::new(1, 1))));
        let mut canvas = Canvas::new(2, 2);
        boxed.render(&mut canvas);
        assert_eq!(canvas.pixel(0, 0), Some(Rgb888::WHITE));
    }

    struct FailingDisplay;

    impl DisplaySink for FailingDisplay {
        type Error = &'static str;

        fn show(&mut self, _frame: &Frame<'_>) -> core::result::Result<(), Self::Error> {
            Err("spi bus fault")
        }
    }

    #[test]
    fn test_show_maps_sink_error() {
        let mut renderer = Renderer::new(Size::new(4, 4), FailingDisplay);
        let err = renderer.show().unwrap_err();
        assert!(matches!(err, GuiError::Display(ref msg) if msg.contains("spi bus fault")));
    }
}
