//! Signer UI Components
//!
//! Visual building blocks drawn onto the shared [`gui_system::canvas::Canvas`].
//!
//! # Components
//!
//! - `Button` - rounded rectangle with an optional label
//! - `IconButton` - button with an icon above its label
//! - `TopNav` - title bar with optional back/power buttons
//! - `TextArea` - wrapped, optionally supersampled body text
//!
//! Geometry and text placement are computed once at construction; `render`
//! only paints and never clears anything outside the component's bounds.
//!
//! # Example
//!
//! ```
//! use gui_components::prelude::*;
//! use gui_system::prelude::*;
//! use embedded_graphics::{prelude::*, primitives::Rectangle};
//!
//! let mut res = Resources::builtin(Theme::default());
//! let mut button = Button::new(
//!     ButtonConfig::new("Scan"),
//!     Rectangle::new(Point::new(8, 60), Size::new(224, 36)),
//!     &mut res,
//! )?;
//! button.set_focus_state(FocusState::Focused);
//!
//! let mut canvas = Canvas::new(240, 240);
//! button.render(&mut canvas);
//! # Ok::<(), GuiError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod button;
pub mod focus;
pub mod icon_button;
pub mod text_area;
pub mod top_nav;

/// Component types and the [`focus::Focusable`] trait.
pub mod prelude {
    pub use crate::button::*;
    pub use crate::focus::*;
    pub use crate::icon_button::*;
    pub use crate::text_area::*;
    pub use crate::top_nav::*;
}

/// Pixel count as a signed coordinate.
pub(crate) fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
