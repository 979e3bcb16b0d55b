//! Top navigation bar
//!
//! A full-width header with a centered title and up to two icon buttons:
//! back on the left, power on the right. The bar is focused as a whole;
//! focusing it highlights whichever buttons it has.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use gui_system::prelude::*;

use crate::button::label_position;
use crate::focus::Focusable;
use crate::icon_button::{IconButton, IconButtonConfig};
use crate::px;

/// What confirming on a focused top bar means.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Leave the screen
    Back,
    /// Open the power menu
    Power,
}

/// Top bar construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct TopNavConfig {
    /// Title text
    pub title: String,
    /// Show the back button (left)
    pub show_back_button: bool,
    /// Show the power button (right)
    pub show_power_button: bool,
    /// Title font family
    pub font_name: String,
    /// Title font size
    pub font_size: u32,
}

impl Default for TopNavConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_back_button: true,
            show_power_button: false,
            font_name: TOP_NAV_TITLE_FONT_NAME.to_owned(),
            font_size: TOP_NAV_TITLE_FONT_SIZE,
        }
    }
}

impl TopNavConfig {
    /// Bar titled `title`, with a back button.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Toggle the back button.
    pub fn back_button(mut self, show: bool) -> Self {
        self.show_back_button = show;
        self
    }

    /// Toggle the power button.
    pub fn power_button(mut self, show: bool) -> Self {
        self.show_power_button = show;
        self
    }
}

/// Header bar.
#[derive(Debug)]
pub struct TopNav {
    width: u32,
    title: String,
    font: FontHandle,
    title_position: Point,
    background: Rgb888,
    font_color: Rgb888,
    back_button: Option<IconButton>,
    power_button: Option<IconButton>,
    state: FocusState,
}

impl TopNav {
    /// Build a bar spanning `width` pixels at the top of the canvas.
    pub fn new(config: TopNavConfig, width: u32, res: &mut Resources) -> Result<Self> {
        let font = res.fonts.get_font(&config.font_name, config.font_size)?;
        let bounds = Rectangle::new(Point::zero(), Size::new(width, TOP_NAV_HEIGHT));
        let title_position = label_position(&font, &config.title, true, bounds, 0);

        let button_size = Size::new(TOP_NAV_BUTTON_SIZE, TOP_NAV_BUTTON_SIZE);
        let edge = px(EDGE_PADDING);
        let nav_button = |icon: &str, x: i32, res: &mut Resources| {
            IconButton::new(
                IconButtonConfig::new(icon).icon_top_padding(TOP_NAV_ICON_TOP_PADDING),
                Rectangle::new(Point::new(x, edge), button_size),
                res,
            )
        };

        let back_button = if config.show_back_button {
            Some(nav_button("back", edge, res)?)
        } else {
            None
        };
        let power_button = if config.show_power_button {
            let x = px(width) - px(TOP_NAV_BUTTON_SIZE) - edge;
            Some(nav_button("power", x, res)?)
        } else {
            None
        };

        tracing::debug!(
            title = %config.title,
            back = back_button.is_some(),
            power = power_button.is_some(),
            "top nav built"
        );
        Ok(Self {
            width,
            title: config.title,
            font,
            title_position,
            background: res.theme.top_nav_background,
            font_color: res.theme.font_color,
            back_button,
            power_button,
            state: FocusState::Normal,
        })
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Top-left corner of the title line.
    pub fn title_position(&self) -> Point {
        self.title_position
    }

    /// Whether there is anything to focus.
    pub fn is_focusable(&self) -> bool {
        self.back_button.is_some() || self.power_button.is_some()
    }

    /// Has a back button.
    pub fn has_back_button(&self) -> bool {
        self.back_button.is_some()
    }

    /// Has a power button.
    pub fn has_power_button(&self) -> bool {
        self.power_button.is_some()
    }

    /// The action a Confirm would trigger: `None` unless focused; back wins
    /// over power when both are present.
    pub fn selected_action(&self) -> Option<NavAction> {
        if !self.state.is_focused() {
            return None;
        }
        if self.back_button.is_some() {
            Some(NavAction::Back)
        } else if self.power_button.is_some() {
            Some(NavAction::Power)
        } else {
            None
        }
    }
}

impl Renderable for TopNav {
    fn render(&self, canvas: &mut Canvas) {
        canvas.fill_rect(self.bounds(), self.background);
        if let Some(button) = &self.back_button {
            button.render(canvas);
        }
        if let Some(button) = &self.power_button {
            button.render(canvas);
        }
        self.font
            .draw(canvas, &self.title, self.title_position, self.font_color);
    }
}

impl Focusable for TopNav {
    fn focus_state(&self) -> FocusState {
        self.state
    }

    fn set_focus_state(&mut self, state: FocusState) {
        self.state = state;
        for button in [&mut self.back_button, &mut self.power_button]
            .into_iter()
            .flatten()
        {
            button.set_focus_state(state);
        }
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width, TOP_NAV_HEIGHT))
    }
}
