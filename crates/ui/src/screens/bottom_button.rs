//! Text body with a button list pinned to the bottom edge.

use embedded_graphics::{prelude::*, primitives::Rectangle};
use gui_components::prelude::*;
use gui_system::prelude::*;

use crate::navigation::Focus;
use crate::px;
use crate::screen::{Screen, ScreenControls};
use crate::screens::button_list::{ButtonListConfig, ButtonListScreen};

/// Options for [`BottomButtonScreen`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BottomButtonConfig {
    /// Top bar and buttons; `bottom` is forced on
    pub list: ButtonListConfig,
    /// Text shown between the top bar and the first button
    pub body: TextAreaConfig,
}

impl BottomButtonConfig {
    /// Titled screen showing `text` above `labels`.
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        text: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            list: ButtonListConfig::new(title, labels),
            body: TextAreaConfig::new(text),
        }
    }
}

/// A [`ButtonListScreen`] pinned to the bottom, with a text body above it.
#[derive(Debug)]
pub struct BottomButtonScreen {
    list: ButtonListScreen,
    body: TextArea,
}

impl BottomButtonScreen {
    /// Build for a canvas of `size`.
    pub fn new(config: BottomButtonConfig, size: Size, res: &mut Resources) -> Result<Self> {
        let list = ButtonListScreen::new(config.list.bottom(true), size, res)?;

        let top = px(TOP_NAV_HEIGHT);
        let first_button_y = list.button_bounds(0).map_or(top, |b| b.top_left.y);
        let body_height = u32::try_from(first_button_y - top).unwrap_or(0);
        let body_bounds = Rectangle::new(Point::new(0, top), Size::new(size.width, body_height));
        let body = TextArea::new(config.body, body_bounds, res)?;

        Ok(Self { list, body })
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.list.focus()
    }

    /// Index of the focused button, or `None` while the top bar is focused.
    pub fn selected_button(&self) -> Option<usize> {
        self.list.selected_button()
    }

    /// The body text area.
    pub fn body(&self) -> &TextArea {
        &self.body
    }

    /// Bounds of button `index`.
    pub fn button_bounds(&self, index: usize) -> Option<Rectangle> {
        self.list.button_bounds(index)
    }
}

impl Screen for BottomButtonScreen {
    fn name(&self) -> &'static str {
        "bottom_button"
    }

    fn controls(&self) -> &ScreenControls {
        self.list.controls()
    }

    fn controls_mut(&mut self) -> &mut ScreenControls {
        self.list.controls_mut()
    }

    fn render_body(&self, canvas: &mut Canvas) {
        self.body.render(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_fills_gap_above_buttons() {
        let mut res = Resources::builtin(Theme::default());
        let config = BottomButtonConfig::new("Wipe", "Erase all keys?", ["Continue", "Cancel"]);
        let screen = BottomButtonScreen::new(config, Size::new(240, 240), &mut res).unwrap();

        assert_eq!(screen.button_bounds(0).unwrap().top_left.y, 152);
        assert_eq!(
            screen.body().bounds(),
            Rectangle::new(Point::new(0, 48), Size::new(240, 104))
        );
        assert_eq!(screen.selected_button(), Some(0));
    }

    #[test]
    fn test_body_overflow_rejected() {
        let mut res = Resources::builtin(Theme::default());
        let text = "word ".repeat(200);
        let config = BottomButtonConfig::new("Wipe", text.trim_end(), ["A", "B", "C"]);
        assert!(matches!(
            BottomButtonScreen::new(config, Size::new(240, 240), &mut res),
            Err(GuiError::LayoutOverflow { .. })
        ));
    }
}
