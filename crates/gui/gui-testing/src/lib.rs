//! Signer UI Testing Utilities
//!
//! Headless harness for driving components and screens without hardware.
//!
//! # Quick start
//!
//! ```
//! use gui_testing::TestHarness;
//! use gui_system::prelude::*;
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
//!
//! let mut t = TestHarness::new();
//! t.canvas_mut()
//!     .fill_rect(Rectangle::new(Point::new(10, 10), Size::new(40, 20)), Rgb888::WHITE);
//! t.show().unwrap();
//!
//! t.assert_pixel(20, 15, Rgb888::WHITE).unwrap();
//! t.assert_shown_pixel(20, 15, Rgb888::WHITE).unwrap();
//! assert_eq!(t.frames_shown(), 1);
//! ```
//!
//! The harness owns:
//!
//! - a [`Renderer`] flushing into a [`RecordingDisplay`]
//! - [`Resources`] serving the UI font families from the built-in mono fonts
//!   and the built-in icons, so no files are needed
//! - a [`ScriptedInput`] the test fills with keys

#![warn(clippy::all)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::path::Path;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use gui_system::prelude::*;

pub use platform::mocks::{RecordingDisplay, ScriptedInput};
pub use platform::Key;

/// Headless renderer, resources and scripted input.
#[derive(Debug)]
pub struct TestHarness {
    renderer: Renderer<RecordingDisplay>,
    resources: Resources,
    input: ScriptedInput,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// 240×240 harness with the default theme.
    pub fn new() -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Harness with a custom canvas size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::with_resources(Size::new(width, height), Resources::builtin(Theme::default()))
    }

    /// Harness with caller-provided resources.
    pub fn with_resources(size: Size, resources: Resources) -> Self {
        Self {
            renderer: Renderer::new(size, RecordingDisplay::new()),
            resources,
            input: ScriptedInput::new(),
        }
    }

    // ── Access ───────────────────────────────────────────────────────────────

    /// Canvas size.
    pub fn size(&self) -> Size {
        self.renderer.size()
    }

    /// Resources for constructing components.
    pub fn resources(&mut self) -> &mut Resources {
        &mut self.resources
    }

    /// Theme in use.
    pub fn theme(&self) -> &Theme {
        &self.resources.theme
    }

    /// The renderer.
    pub fn renderer(&mut self) -> &mut Renderer<RecordingDisplay> {
        &mut self.renderer
    }

    /// The canvas.
    pub fn canvas(&self) -> &Canvas {
        self.renderer.canvas()
    }

    /// The canvas, mutably.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        self.renderer.canvas_mut()
    }

    /// Renderer and input together, for running a screen loop.
    pub fn parts(&mut self) -> (&mut Renderer<RecordingDisplay>, &mut ScriptedInput) {
        (&mut self.renderer, &mut self.input)
    }

    /// Flush the canvas to the recording display.
    pub fn show(&mut self) -> Result<()> {
        self.renderer.show()
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Append `keys` to the input script.
    pub fn press(&mut self, keys: &[Key]) -> &mut Self {
        for key in keys {
            // a full script only happens in a runaway test; dropping is fine
            let _ = self.input.push(*key);
        }
        self
    }

    /// The scripted input.
    pub fn input(&mut self) -> &mut ScriptedInput {
        &mut self.input
    }

    /// Keys still queued.
    pub fn pending_keys(&self) -> usize {
        self.input.remaining()
    }

    // ── Display ──────────────────────────────────────────────────────────────

    /// Number of flushes so far.
    pub fn frames_shown(&self) -> usize {
        self.renderer.display().show_count()
    }

    /// Canvas color at `(x, y)`.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.canvas().pixel(x, y)
    }

    /// Color at `(x, y)` in the last flushed frame.
    pub fn shown_pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        let [r, g, b] = self.renderer.display().last_frame()?.rgb(x, y)?;
        Some(Rgb888::new(r, g, b))
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that canvas pixel `(x, y)` is `expected`.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb888) -> core::result::Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        check_color(x, y, expected, actual)
    }

    /// Assert that pixel `(x, y)` of the last flushed frame is `expected`.
    pub fn assert_shown_pixel(
        &self,
        x: u32,
        y: u32,
        expected: Rgb888,
    ) -> core::result::Result<(), String> {
        let actual = self
            .shown_pixel_at(x, y)
            .ok_or_else(|| format!("No flushed pixel at ({x}, {y})"))?;
        check_color(x, y, expected, actual)
    }

    /// Assert that every pixel inside `rect` is `color`.
    pub fn assert_region_uniform(
        &self,
        rect: Rectangle,
        color: Rgb888,
    ) -> core::result::Result<(), String> {
        for p in rect.points() {
            let (x, y) = coords(p).ok_or_else(|| format!("{rect:?} leaves the canvas"))?;
            self.assert_pixel(x, y, color)
                .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
        }
        Ok(())
    }

    /// Assert that `rect` contains at least one pixel of `color`.
    pub fn assert_region_contains(
        &self,
        rect: Rectangle,
        color: Rgb888,
    ) -> core::result::Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no {color:?} pixel found in {rect:?}"
            ))
        }
    }

    /// Count pixels of `color` inside `rect`.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Rgb888) -> usize {
        rect.points()
            .filter_map(coords)
            .filter(|&(x, y)| self.pixel_at(x, y) == Some(color))
            .count()
    }

    // ── Screenshots ──────────────────────────────────────────────────────────

    /// Save the canvas as PNG. Parent directories are created.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> core::result::Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        self.canvas()
            .save_png(path)
            .map_err(|e| format!("Failed to save '{}': {e}", path.display()))
    }
}

fn coords(p: Point) -> Option<(u32, u32)> {
    Some((u32::try_from(p.x).ok()?, u32::try_from(p.y).ok()?))
}

fn check_color(x: u32, y: u32, expected: Rgb888, actual: Rgb888) -> core::result::Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!(
            "assert_pixel({x}, {y}): expected {expected:?}, got {actual:?}"
        ))
    }
}
