//! Top bar over a block of text.

use embedded_graphics::{prelude::*, primitives::Rectangle};
use gui_components::prelude::*;
use gui_system::prelude::*;

use crate::navigation::{Focus, NavLayout};
use crate::px;
use crate::screen::{Screen, ScreenControls};

/// Options for [`TextTopNavScreen`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextTopNavConfig {
    /// Top bar
    pub top_nav: TopNavConfig,
    /// Body text, filling everything below the top bar
    pub body: TextAreaConfig,
}

impl TextTopNavConfig {
    /// Titled screen showing `text`.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            top_nav: TopNavConfig::new(title),
            body: TextAreaConfig::new(text),
        }
    }
}

/// Informational screen: the only focusable thing is the top bar.
///
/// Starts with nothing focused. Up focuses the bar, Down releases it, and
/// Confirm while it is focused returns its action.
#[derive(Debug)]
pub struct TextTopNavScreen {
    controls: ScreenControls,
    body: TextArea,
}

impl TextTopNavScreen {
    /// Build for a canvas of `size`.
    pub fn new(config: TextTopNavConfig, size: Size, res: &mut Resources) -> Result<Self> {
        let top_nav = TopNav::new(config.top_nav, size.width, res)?;
        let body_bounds = Rectangle::new(
            Point::new(0, px(TOP_NAV_HEIGHT)),
            Size::new(size.width, size.height.saturating_sub(TOP_NAV_HEIGHT)),
        );
        let body = TextArea::new(config.body, body_bounds, res)?;
        let controls =
            ScreenControls::new(top_nav, Vec::new(), NavLayout::TopNavOnly, res.theme.background)?;
        Ok(Self { controls, body })
    }

    /// Current focus: [`Focus::Nothing`] or [`Focus::TopNav`].
    pub fn focus(&self) -> Focus {
        self.controls.focus()
    }

    /// The body text area.
    pub fn body(&self) -> &TextArea {
        &self.body
    }
}

impl Screen for TextTopNavScreen {
    fn name(&self) -> &'static str {
        "text_top_nav"
    }

    fn controls(&self) -> &ScreenControls {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ScreenControls {
        &mut self.controls
    }

    fn render_body(&self, canvas: &mut Canvas) {
        self.body.render(canvas);
    }
}
