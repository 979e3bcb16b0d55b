//! Button component

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use gui_system::prelude::*;

use crate::focus::Focusable;
use crate::px;

/// Button colors for both focus states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Fill when not focused
    pub background: Rgb888,
    /// Fill when focused
    pub selected_background: Rgb888,
    /// Label color when not focused
    pub font_color: Rgb888,
    /// Label color when focused
    pub selected_font_color: Rgb888,
    /// Corner radius of the fill
    pub corner_radius: u32,
}

impl ButtonStyle {
    /// Button colors from `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.button_background,
            selected_background: theme.button_selected,
            font_color: theme.font_color,
            selected_font_color: theme.selected_font_color,
            corner_radius: COMPONENT_PADDING,
        }
    }

    /// `(background, foreground)` for `state`.
    pub fn colors(&self, state: FocusState) -> (Rgb888, Rgb888) {
        match state {
            FocusState::Normal => (self.background, self.font_color),
            FocusState::Focused => (self.selected_background, self.selected_font_color),
        }
    }
}

/// Button construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    /// Label, if any
    pub label: Option<String>,
    /// Label font family
    pub font_name: String,
    /// Label font size
    pub font_size: u32,
    /// Center the label; otherwise inset it by `COMPONENT_PADDING`
    pub centered: bool,
    /// Push the label box down by this many pixels
    pub text_y_offset: u32,
    /// Colors; `None` takes them from the theme
    pub style: Option<ButtonStyle>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: None,
            font_name: BUTTON_FONT_NAME.to_owned(),
            font_size: BUTTON_FONT_SIZE,
            centered: true,
            text_y_offset: 0,
            style: None,
        }
    }
}

impl ButtonConfig {
    /// Centered label in the button font.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// No label at all.
    pub fn unlabeled() -> Self {
        Self::default()
    }

    /// Override the label font.
    pub fn font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    /// Center or left-align the label.
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Push the label box down.
    pub fn text_y_offset(mut self, offset: u32) -> Self {
        self.text_y_offset = offset;
        self
    }

    /// Override the colors.
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[derive(Debug)]
struct Label {
    text: String,
    font: FontHandle,
    position: Point,
}

/// Rounded-rectangle button.
#[derive(Debug)]
pub struct Button {
    bounds: Rectangle,
    label: Option<Label>,
    style: ButtonStyle,
    state: FocusState,
}

impl Button {
    /// Build a button occupying `bounds`.
    ///
    /// The label font is fetched here, so a missing font fails construction
    /// rather than rendering.
    pub fn new(config: ButtonConfig, bounds: Rectangle, res: &mut Resources) -> Result<Self> {
        let style = config
            .style
            .unwrap_or_else(|| ButtonStyle::from_theme(&res.theme));
        let label = match config.label {
            Some(text) => {
                let font = res.fonts.get_font(&config.font_name, config.font_size)?;
                let position =
                    label_position(&font, &text, config.centered, bounds, config.text_y_offset);
                Some(Label {
                    text,
                    font,
                    position,
                })
            }
            None => None,
        };
        Ok(Self {
            bounds,
            label,
            style,
            state: FocusState::Normal,
        })
    }

    /// Label text, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_ref().map(|l| l.text.as_str())
    }

    /// Top-left corner of the label line, if any.
    pub fn label_position(&self) -> Option<Point> {
        self.label.as_ref().map(|l| l.position)
    }

    /// Colors in use.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }
}

impl Renderable for Button {
    fn render(&self, canvas: &mut Canvas) {
        let (background, foreground) = self.style.colors(self.state);
        canvas.fill_rounded_rect(self.bounds, self.style.corner_radius, background);
        if let Some(label) = &self.label {
            label
                .font
                .draw(canvas, &label.text, label.position, foreground);
        }
    }
}

impl Focusable for Button {
    fn focus_state(&self) -> FocusState {
        self.state
    }

    fn set_focus_state(&mut self, state: FocusState) {
        self.state = state;
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

/// Where to draw `text` so its visible ink is centered in `bounds`.
///
/// The label box is `bounds` with its top pushed down by `text_y_offset`.
/// Vertical centering uses the ascent minus the ink's top offset, so
/// descenders do not pull the label upwards.
pub(crate) fn label_position(
    font: &Font,
    text: &str,
    centered: bool,
    bounds: Rectangle,
    text_y_offset: u32,
) -> Point {
    let ink = font.ink_offset(text);
    let box_width = px(bounds.size.width);
    let box_height = px(bounds.size.height.saturating_sub(text_y_offset));
    let width = px(font.text_width(text));
    let ascent = px(font.metrics().ascent);

    let x = if centered {
        (box_width - (width - ink.x)) / 2 - ink.x
    } else {
        px(COMPONENT_PADDING)
    };
    let y = (box_height - (ascent - ink.y)) / 2 - ink.y;

    bounds.top_left + Point::new(x, y + px(text_y_offset))
}
