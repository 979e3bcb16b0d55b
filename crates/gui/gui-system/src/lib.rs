//! Signer UI System
//!
//! Everything the visual components need below them: the shared canvas, the
//! font cache, the text layout engine and the icon store.
//!
//! # Architecture
//!
//! - Canvas: RGB bitmap implementing `DrawTarget`, plus image paste/blend
//! - Renderer: canvas + [`platform::DisplaySink`], owns the `show` step
//! - Fonts: (family, size) cache over `.ttf` files and built-in mono fonts
//! - Text: line breaking and centering for bounded text boxes
//! - Icons: normal/selected image pairs, from PNG files or drawn in-process
//!
//! # Example
//!
//! ```no_run
//! use gui_system::prelude::*;
//!
//! let mut fonts = FontCache::new("resources/fonts");
//! let font = fonts.get_font("OpenSans-Regular", 17)?;
//! let block = layout("Hello world", &*font, LayoutParams::new(240, 100, true))?;
//! assert_eq!(block.lines.len(), 1);
//! # Ok::<(), GuiError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod config;
pub mod error;
pub mod font;
pub mod icon;
pub mod render;
pub mod resources;
pub mod style;
pub mod text;

pub use error::{GuiError, Result};

/// Everything a component or screen usually needs.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::config::*;
    pub use crate::error::{GuiError, Result};
    pub use crate::font::{Font, FontCache, FontHandle, FontMetrics};
    pub use crate::icon::{BuiltinIcon, IconHandle, IconPair, IconStore};
    pub use crate::render::{Renderable, Renderer};
    pub use crate::resources::Resources;
    pub use crate::style::{FocusState, Theme};
    pub use crate::text::{layout, LayoutParams, TextBlock, TextLine, TextMeasure};
}
