//! Focusable components

use embedded_graphics::primitives::Rectangle;
use gui_system::prelude::{FocusState, Renderable};

/// A component the focus cursor can land on.
///
/// Changing the focus state never draws; the owner re-renders the component
/// afterwards.
pub trait Focusable: Renderable {
    /// Current state.
    fn focus_state(&self) -> FocusState;

    /// Switch state.
    fn set_focus_state(&mut self, state: FocusState);

    /// Area the component paints.
    fn bounds(&self) -> Rectangle;

    /// Shorthand for `focus_state().is_focused()`.
    fn is_focused(&self) -> bool {
        self.focus_state().is_focused()
    }
}
