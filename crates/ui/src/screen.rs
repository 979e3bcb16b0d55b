//! Screen plumbing shared by every template.
//!
//! A screen is a top bar, an optional body and a set of focusable buttons,
//! driven by a [`FocusNavigator`]. [`ScreenControls`] bundles those and
//! applies navigator outcomes to the components; the [`Screen`] trait adds
//! the render order and the blocking run loop on top.

use embedded_graphics::pixelcolor::Rgb888;
use gui_components::prelude::*;
use gui_system::prelude::*;
use platform::{DisplaySink, InputSource, Key};

use crate::navigation::{Focus, FocusNavigator, NavLayout, NavOutcome};

/// Integer code for leaving through the back button.
pub const RET_CODE_BACK_BUTTON: i32 = -1;
/// Integer code for leaving through the power button.
pub const RET_CODE_POWER_BUTTON: i32 = -2;

/// What the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Button `i`, in construction order
    Button(usize),
    /// The top bar's back button
    Back,
    /// The top bar's power button
    Power,
}

impl Selection {
    /// The button index, or [`RET_CODE_BACK_BUTTON`] / [`RET_CODE_POWER_BUTTON`].
    pub fn code(self) -> i32 {
        match self {
            Selection::Button(i) => i32::try_from(i).unwrap_or(i32::MAX),
            Selection::Back => RET_CODE_BACK_BUTTON,
            Selection::Power => RET_CODE_POWER_BUTTON,
        }
    }
}

impl From<NavAction> for Selection {
    fn from(action: NavAction) -> Self {
        match action {
            NavAction::Back => Selection::Back,
            NavAction::Power => Selection::Power,
        }
    }
}

/// What a key press did to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing changed; no flush needed.
    Unchanged,
    /// Components were re-rendered; the canvas needs a flush.
    Redrawn,
    /// The user confirmed a choice.
    Selected(Selection),
}

/// Top bar, buttons and the cursor over them.
pub struct ScreenControls {
    top_nav: TopNav,
    buttons: Vec<Box<dyn Focusable>>,
    navigator: FocusNavigator,
    background: Rgb888,
}

impl core::fmt::Debug for ScreenControls {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScreenControls")
            .field("top_nav", &self.top_nav.title())
            .field("buttons", &self.buttons.len())
            .field("focus", &self.navigator.focus())
            .finish()
    }
}

impl ScreenControls {
    /// Wire up `top_nav` and `buttons` under `layout`, focusing the initial
    /// component.
    pub fn new(
        top_nav: TopNav,
        buttons: Vec<Box<dyn Focusable>>,
        layout: NavLayout,
        background: Rgb888,
    ) -> Result<Self> {
        if layout.buttons() != buttons.len() {
            return Err(GuiError::configuration(format!(
                "layout expects {} buttons, got {}",
                layout.buttons(),
                buttons.len()
            )));
        }
        let navigator = FocusNavigator::new(layout, top_nav.is_focusable())?;
        let mut controls = Self {
            top_nav,
            buttons,
            navigator,
            background,
        };
        controls.set_focus_state(controls.navigator.focus(), FocusState::Focused);
        Ok(controls)
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.navigator.focus()
    }

    /// Keys the run loop waits for.
    pub fn keys(&self) -> heapless::Vec<Key, 5> {
        self.navigator.keys()
    }

    /// The top bar.
    pub fn top_nav(&self) -> &TopNav {
        &self.top_nav
    }

    /// The buttons, in construction order.
    pub fn buttons(&self) -> &[Box<dyn Focusable>] {
        &self.buttons
    }

    /// Canvas clear color.
    pub fn background(&self) -> Rgb888 {
        self.background
    }

    /// Draw the top bar.
    pub fn render_top_nav(&self, canvas: &mut Canvas) {
        self.top_nav.render(canvas);
    }

    /// Draw every button.
    pub fn render_buttons(&self, canvas: &mut Canvas) {
        for button in &self.buttons {
            button.render(canvas);
        }
    }

    /// Feed one key press: move the cursor, re-render only the components
    /// whose focus changed, or report a selection.
    pub fn step(&mut self, key: Key, canvas: &mut Canvas) -> StepOutcome {
        match self.navigator.handle(key) {
            NavOutcome::Ignored => StepOutcome::Unchanged,
            NavOutcome::Moved { from, to } => {
                self.set_focus_state(from, FocusState::Normal);
                self.set_focus_state(to, FocusState::Focused);
                self.render_focus(from, canvas);
                self.render_focus(to, canvas);
                StepOutcome::Redrawn
            }
            NavOutcome::Commit(Focus::Button(i)) => StepOutcome::Selected(Selection::Button(i)),
            NavOutcome::Commit(Focus::TopNav) => match self.top_nav.selected_action() {
                Some(action) => StepOutcome::Selected(action.into()),
                None => StepOutcome::Unchanged,
            },
            NavOutcome::Commit(Focus::Nothing) => StepOutcome::Unchanged,
        }
    }

    fn set_focus_state(&mut self, focus: Focus, state: FocusState) {
        match focus {
            Focus::Nothing => {}
            Focus::TopNav => self.top_nav.set_focus_state(state),
            Focus::Button(i) => {
                if let Some(button) = self.buttons.get_mut(i) {
                    button.set_focus_state(state);
                }
            }
        }
    }

    fn render_focus(&self, focus: Focus, canvas: &mut Canvas) {
        match focus {
            Focus::Nothing => {}
            Focus::TopNav => self.top_nav.render(canvas),
            Focus::Button(i) => {
                if let Some(button) = self.buttons.get(i) {
                    button.render(canvas);
                }
            }
        }
    }
}

/// A full-canvas screen that runs until the user confirms a choice.
pub trait Screen {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// The screen's controls.
    fn controls(&self) -> &ScreenControls;

    /// The screen's controls, mutably.
    fn controls_mut(&mut self) -> &mut ScreenControls;

    /// Draw whatever sits between the top bar and the buttons.
    fn render_body(&self, _canvas: &mut Canvas) {}

    /// Full redraw: clear, top bar, body, buttons.
    fn render(&self, canvas: &mut Canvas) {
        let controls = self.controls();
        canvas.fill(controls.background());
        controls.render_top_nav(canvas);
        self.render_body(canvas);
        controls.render_buttons(canvas);
    }

    /// Render, flush, then handle keys until a selection is made.
    ///
    /// The canvas is flushed once on entry and after every key that changed
    /// the focus. May be called again after returning; the screen is redrawn
    /// from its current focus.
    fn display<D, I>(&mut self, renderer: &mut Renderer<D>, input: &mut I) -> Result<Selection>
    where
        D: DisplaySink,
        I: InputSource + ?Sized,
    {
        tracing::info!(screen = self.name(), focus = ?self.controls().focus(), "screen shown");
        self.render(renderer.canvas_mut());
        renderer.show()?;

        loop {
            let keys = self.controls().keys();
            let key = input.wait_for(&keys, true, &[Key::Confirm])?;
            tracing::trace!(screen = self.name(), key = key.name(), "key");
            match self.controls_mut().step(key, renderer.canvas_mut()) {
                StepOutcome::Unchanged => {}
                StepOutcome::Redrawn => renderer.show()?,
                StepOutcome::Selected(selection) => {
                    tracing::info!(screen = self.name(), ?selection, "selection made");
                    return Ok(selection);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_codes() {
        assert_eq!(Selection::Button(0).code(), 0);
        assert_eq!(Selection::Button(3).code(), 3);
        assert_eq!(Selection::Back.code(), RET_CODE_BACK_BUTTON);
        assert_eq!(Selection::Power.code(), RET_CODE_POWER_BUTTON);
    }

    #[test]
    fn test_selection_from_nav_action() {
        assert_eq!(Selection::from(NavAction::Back), Selection::Back);
        assert_eq!(Selection::from(NavAction::Power), Selection::Power);
    }

    #[test]
    fn test_layout_must_match_buttons() {
        let mut res = Resources::builtin(Theme::default());
        let top_nav = TopNav::new(TopNavConfig::new("T"), 240, &mut res).unwrap();
        let err = ScreenControls::new(
            top_nav,
            Vec::new(),
            NavLayout::List { buttons: 2 },
            Rgb888::new(0, 0, 0),
        )
        .unwrap_err();
        assert!(matches!(err, GuiError::Configuration(_)));
    }
}
