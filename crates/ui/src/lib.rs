//! Application UI layer: focus navigation and the screen templates.
//!
//! Every screen is a [`screen::Screen`]: it builds its components up front,
//! renders once on entry and then reacts to key presses until the user picks
//! something. Screens never own the canvas, display or input; those are
//! passed to [`screen::Screen::display`].
//!
//! ```
//! use embedded_graphics::prelude::*;
//! use gui_system::prelude::*;
//! use platform::{mocks::{RecordingDisplay, ScriptedInput}, Key};
//! use ui::prelude::*;
//!
//! let mut res = Resources::builtin(Theme::default());
//! let mut screen = ButtonListScreen::new(
//!     ButtonListConfig::new("Import", ["Scan", "Enter Manually", "Back"]),
//!     Size::new(240, 240),
//!     &mut res,
//! )?;
//!
//! let mut renderer = Renderer::new(Size::new(240, 240), RecordingDisplay::new());
//! let mut input = ScriptedInput::from_keys(&[Key::Down, Key::Down, Key::Confirm]);
//! assert_eq!(screen.display(&mut renderer, &mut input)?, Selection::Button(2));
//! # Ok::<(), GuiError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
#![warn(missing_docs)]

pub mod navigation;
pub mod screen;
pub mod screens;

/// Screens, their configs and the run-loop types.
pub mod prelude {
    pub use crate::navigation::{Focus, FocusNavigator, NavLayout, NavOutcome};
    pub use crate::screen::{
        Screen, ScreenControls, Selection, StepOutcome, RET_CODE_BACK_BUTTON,
        RET_CODE_POWER_BUTTON,
    };
    pub use crate::screens::*;
}

/// Pixel count as a signed coordinate.
pub(crate) fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
