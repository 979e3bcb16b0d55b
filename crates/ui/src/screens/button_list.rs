//! Vertical list of full-width buttons under a top bar.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use gui_components::prelude::*;
use gui_system::prelude::*;

use crate::navigation::{Focus, NavLayout};
use crate::px;
use crate::screen::{Screen, ScreenControls};

/// Options for [`ButtonListScreen`].
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonListConfig {
    /// Top bar
    pub top_nav: TopNavConfig,
    /// One button per label, top to bottom
    pub labels: Vec<String>,
    /// Center the labels; otherwise left-align them
    pub centered: bool,
    /// Pin the list to the bottom edge instead of centering it
    pub bottom: bool,
    /// Label font family
    pub font_name: String,
    /// Label font size
    pub font_size: u32,
    /// Fill of the focused button; `None` uses the theme
    pub selected_color: Option<Rgb888>,
}

impl Default for ButtonListConfig {
    fn default() -> Self {
        Self {
            top_nav: TopNavConfig::default(),
            labels: Vec::new(),
            centered: true,
            bottom: false,
            font_name: BUTTON_FONT_NAME.to_owned(),
            font_size: BUTTON_FONT_SIZE,
            selected_color: None,
        }
    }
}

impl ButtonListConfig {
    /// Titled list of `labels`.
    pub fn new<S: Into<String>>(title: impl Into<String>, labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            top_nav: TopNavConfig::new(title),
            labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Center or left-align the labels.
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Pin the list to the bottom edge.
    pub fn bottom(mut self, bottom: bool) -> Self {
        self.bottom = bottom;
        self
    }

    /// Replace the top bar options.
    pub fn top_nav(mut self, top_nav: TopNavConfig) -> Self {
        self.top_nav = top_nav;
        self
    }
}

/// Bounds of each button in a list of `count` on a canvas of `size`.
///
/// Buttons are `3/20` of the canvas height, `COMPONENT_PADDING` apart and
/// inset by `EDGE_PADDING`. The list is centered below the top bar, or
/// pinned `EDGE_PADDING` above the bottom edge; a list too tall for either
/// starts right under the top bar and runs off the bottom.
pub fn list_button_bounds(count: usize, size: Size, bottom: bool) -> Vec<Rectangle> {
    let button_height = u32::try_from(u64::from(size.height) * 3 / 20).unwrap_or(u32::MAX);
    let n = px(u32::try_from(count).unwrap_or(u32::MAX));
    let pitch = px(button_height).saturating_add(px(COMPONENT_PADDING));
    let list_height = n
        .saturating_mul(px(button_height))
        .saturating_add(px(COMPONENT_PADDING).saturating_mul((n - 1).max(0)));

    let canvas_height = px(size.height);
    let top = px(TOP_NAV_HEIGHT);
    let y = if bottom {
        canvas_height.saturating_sub(list_height.saturating_add(px(EDGE_PADDING)))
    } else {
        top.saturating_add(canvas_height.saturating_sub(top).saturating_sub(list_height) / 2)
    }
    .max(top);

    let width = size.width.saturating_sub(2 * EDGE_PADDING);
    (0..n)
        .map(|i| {
            Rectangle::new(
                Point::new(px(EDGE_PADDING), y.saturating_add(i.saturating_mul(pitch))),
                Size::new(width, button_height),
            )
        })
        .collect()
}

/// Menu screen: a top bar over a vertical list of buttons.
///
/// Starts on the first button. Up from the first button moves to the top
/// bar (if it has a button), Down from the bar returns to the first button,
/// and the list does not wrap.
#[derive(Debug)]
pub struct ButtonListScreen {
    controls: ScreenControls,
}

impl ButtonListScreen {
    /// Build for a canvas of `size`. An empty label list is a configuration
    /// error.
    pub fn new(config: ButtonListConfig, size: Size, res: &mut Resources) -> Result<Self> {
        if config.labels.is_empty() {
            return Err(GuiError::configuration("button list needs at least one label"));
        }
        let top_nav = TopNav::new(config.top_nav, size.width, res)?;

        let mut style = ButtonStyle::from_theme(&res.theme);
        if let Some(color) = config.selected_color {
            style.selected_background = color;
        }

        let bounds = list_button_bounds(config.labels.len(), size, config.bottom);
        let mut buttons: Vec<Box<dyn Focusable>> = Vec::with_capacity(bounds.len());
        for (label, area) in config.labels.into_iter().zip(bounds) {
            let button_config = ButtonConfig::new(label)
                .font(config.font_name.clone(), config.font_size)
                .centered(config.centered)
                .style(style);
            buttons.push(Box::new(Button::new(button_config, area, res)?));
        }

        let layout = NavLayout::List {
            buttons: buttons.len(),
        };
        let controls = ScreenControls::new(top_nav, buttons, layout, res.theme.background)?;
        Ok(Self { controls })
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.controls.focus()
    }

    /// Index of the focused button, or `None` while the top bar is focused.
    pub fn selected_button(&self) -> Option<usize> {
        match self.controls.focus() {
            Focus::Button(i) => Some(i),
            Focus::TopNav | Focus::Nothing => None,
        }
    }

    /// Bounds of button `index`.
    pub fn button_bounds(&self, index: usize) -> Option<Rectangle> {
        self.controls.buttons().get(index).map(|b| b.bounds())
    }
}

impl Screen for ButtonListScreen {
    fn name(&self) -> &'static str {
        "button_list"
    }

    fn controls(&self) -> &ScreenControls {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ScreenControls {
        &mut self.controls
    }
}
