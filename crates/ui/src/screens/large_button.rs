//! Two-column grid of large buttons, optionally with icons.

use embedded_graphics::{prelude::*, primitives::Rectangle};
use gui_components::prelude::*;
use gui_system::prelude::*;

use crate::navigation::{Focus, NavLayout};
use crate::px;
use crate::screen::{Screen, ScreenControls};

/// One grid cell: a label and an optional icon above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridButton {
    /// Button label
    pub label: String,
    /// Icon name in the icon store
    pub icon: Option<String>,
}

impl GridButton {
    /// Text-only button.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
        }
    }

    /// Button with `icon` above `label`.
    pub fn with_icon(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: Some(icon.into()),
        }
    }
}

impl<L: Into<String>> From<(L, Option<&str>)> for GridButton {
    fn from((label, icon): (L, Option<&str>)) -> Self {
        Self {
            label: label.into(),
            icon: icon.map(str::to_owned),
        }
    }
}

/// Options for [`LargeButtonScreen`].
#[derive(Debug, Clone, PartialEq)]
pub struct LargeButtonConfig {
    /// Top bar
    pub top_nav: TopNavConfig,
    /// Two or four cells, filled row by row
    pub buttons: Vec<GridButton>,
    /// Label font family
    pub font_name: String,
    /// Label font size
    pub font_size: u32,
}

impl Default for LargeButtonConfig {
    fn default() -> Self {
        Self {
            top_nav: TopNavConfig::default(),
            buttons: Vec::new(),
            font_name: BUTTON_FONT_NAME.to_owned(),
            font_size: LARGE_BUTTON_FONT_SIZE,
        }
    }
}

impl LargeButtonConfig {
    /// Titled grid of `buttons`.
    pub fn new<B: Into<GridButton>>(
        title: impl Into<String>,
        buttons: impl IntoIterator<Item = B>,
    ) -> Self {
        Self {
            top_nav: TopNavConfig::new(title),
            buttons: buttons.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Replace the top bar options.
    pub fn top_nav(mut self, top_nav: TopNavConfig) -> Self {
        self.top_nav = top_nav;
        self
    }
}

/// Bounds of each cell of a `count`-button grid on a canvas of `size`.
///
/// Cells are 4:3, two per row, `COMPONENT_PADDING` apart. The grid is
/// centered vertically in the space between the top bar and the bottom
/// `EDGE_PADDING`, or starts right under the top bar if it does not fit.
pub fn grid_button_bounds(count: usize, size: Size) -> Vec<Rectangle> {
    let width = size.width.saturating_sub(2 * EDGE_PADDING + COMPONENT_PADDING) / 2;
    let height = u32::try_from(u64::from(width) * 3 / 4).unwrap_or(u32::MAX);
    let rows = px(u32::try_from(count.div_ceil(2)).unwrap_or(u32::MAX));

    let grid_height = rows
        .saturating_mul(px(height))
        .saturating_add((rows - 1).max(0).saturating_mul(px(COMPONENT_PADDING)));
    let free = px(size.height)
        .saturating_sub(px(TOP_NAV_HEIGHT))
        .saturating_sub(px(EDGE_PADDING))
        .saturating_sub(grid_height)
        .max(0);
    let start_y = px(TOP_NAV_HEIGHT).saturating_add(free / 2);

    (0..count)
        .map(|i| {
            let column = if i % 2 == 0 { 0 } else { 1 };
            let row = if i < 2 { 0 } else { 1 };
            let x = px(EDGE_PADDING)
                .saturating_add(column * px(width).saturating_add(px(COMPONENT_PADDING)));
            let y = start_y.saturating_add(row * px(height).saturating_add(px(COMPONENT_PADDING)));
            Rectangle::new(Point::new(x, y), Size::new(width, height))
        })
        .collect()
}

/// Choice screen with two or four large buttons in a 2-column grid.
///
/// Starts on the first button. Left/Right move within a row, Up/Down move
/// between rows, Up from the top row focuses the bar, and Down from the bar
/// returns to the button focused before.
#[derive(Debug)]
pub struct LargeButtonScreen {
    controls: ScreenControls,
}

impl LargeButtonScreen {
    /// Build for a canvas of `size`. Any button count other than 2 or 4 is a
    /// configuration error.
    pub fn new(config: LargeButtonConfig, size: Size, res: &mut Resources) -> Result<Self> {
        let count = config.buttons.len();
        if count != 2 && count != 4 {
            return Err(GuiError::configuration(format!(
                "large button grid needs 2 or 4 buttons, got {count}"
            )));
        }
        let top_nav = TopNav::new(config.top_nav, size.width, res)?;

        // Push icon-button labels below the icon, scaled with the canvas.
        let icon_label_offset =
            u32::try_from(u64::from(TOP_NAV_HEIGHT) * u64::from(size.height) / u64::from(CANVAS_HEIGHT))
                .unwrap_or(u32::MAX);

        let bounds = grid_button_bounds(count, size);
        let mut buttons: Vec<Box<dyn Focusable>> = Vec::with_capacity(count);
        for (cell, area) in config.buttons.into_iter().zip(bounds) {
            let label = ButtonConfig::new(cell.label).font(config.font_name.clone(), config.font_size);
            let button: Box<dyn Focusable> = match cell.icon {
                Some(icon) => {
                    let icon_config = IconButtonConfig::new(icon)
                        .button(label.text_y_offset(icon_label_offset));
                    Box::new(IconButton::new(icon_config, area, res)?)
                }
                None => Box::new(Button::new(label, area, res)?),
            };
            buttons.push(button);
        }

        let controls = ScreenControls::new(
            top_nav,
            buttons,
            NavLayout::Grid { buttons: count },
            res.theme.background,
        )?;
        Ok(Self { controls })
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.controls.focus()
    }

    /// Bounds of button `index`.
    pub fn button_bounds(&self, index: usize) -> Option<Rectangle> {
        self.controls.buttons().get(index).map(|b| b.bounds())
    }
}

impl Screen for LargeButtonScreen {
    fn name(&self) -> &'static str {
        "large_button"
    }

    fn controls(&self) -> &ScreenControls {
        &self.controls
    }

    fn controls_mut(&mut self) -> &mut ScreenControls {
        &mut self.controls
    }
}
