//! Button with an icon above its label

use embedded_graphics::{prelude::*, primitives::Rectangle};
use gui_system::prelude::*;

use crate::button::{Button, ButtonConfig};
use crate::focus::Focusable;
use crate::px;

/// Icon button construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct IconButtonConfig {
    /// Options for the underlying button
    pub button: ButtonConfig,
    /// Icon name in the icon store
    pub icon_name: String,
    /// Gap between the button's top edge and the icon
    pub icon_top_padding: u32,
}

impl IconButtonConfig {
    /// Icon with no label.
    pub fn new(icon_name: impl Into<String>) -> Self {
        Self {
            button: ButtonConfig::unlabeled(),
            icon_name: icon_name.into(),
            icon_top_padding: ICON_TOP_PADDING,
        }
    }

    /// Use `button` for the label and colors.
    pub fn button(mut self, button: ButtonConfig) -> Self {
        self.button = button;
        self
    }

    /// Override the icon inset.
    pub fn icon_top_padding(mut self, padding: u32) -> Self {
        self.icon_top_padding = padding;
        self
    }
}

/// A [`Button`] with an icon pasted above the label.
///
/// The icon is horizontally centered; its focused variant is shown while the
/// button is focused.
#[derive(Debug)]
pub struct IconButton {
    button: Button,
    icon: IconHandle,
    icon_position: Point,
}

impl IconButton {
    /// Build an icon button occupying `bounds`.
    pub fn new(config: IconButtonConfig, bounds: Rectangle, res: &mut Resources) -> Result<Self> {
        let icon = res.icons.get_icon(&config.icon_name)?;
        let button = Button::new(config.button, bounds, res)?;
        let icon_x = (px(bounds.size.width) - px(icon.size().width)) / 2;
        let icon_position = bounds.top_left + Point::new(icon_x, px(config.icon_top_padding));
        tracing::trace!(icon = %config.icon_name, position = ?icon_position, "icon button built");
        Ok(Self {
            button,
            icon,
            icon_position,
        })
    }

    /// Top-left corner of the icon.
    pub fn icon_position(&self) -> Point {
        self.icon_position
    }

    /// The underlying button.
    pub fn button(&self) -> &Button {
        &self.button
    }
}

impl Renderable for IconButton {
    fn render(&self, canvas: &mut Canvas) {
        self.button.render(canvas);
        canvas.paste(self.icon.for_state(self.button.focus_state()), self.icon_position);
    }
}

impl Focusable for IconButton {
    fn focus_state(&self) -> FocusState {
        self.button.focus_state()
    }

    fn set_focus_state(&mut self, state: FocusState) {
        self.button.set_focus_state(state);
    }

    fn bounds(&self) -> Rectangle {
        self.button.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gui_system::icon::BUILTIN_ICON_SIZE;

    #[test]
    fn test_icon_centered_below_top_padding() {
        let mut res = Resources::builtin(Theme::default());
        let bounds = Rectangle::new(Point::new(8, 56), Size::new(108, 81));
        let button = IconButton::new(IconButtonConfig::new("check"), bounds, &mut res).unwrap();
        let expected_x = 8 + (108 - BUILTIN_ICON_SIZE as i32) / 2;
        assert_eq!(button.icon_position(), Point::new(expected_x, 56 + 8));
    }

    #[test]
    fn test_focused_variant_is_pasted() {
        let theme = Theme::default();
        let mut res = Resources::builtin(theme);
        let bounds = Rectangle::new(Point::new(0, 0), Size::new(32, 32));
        let mut button = IconButton::new(
            IconButtonConfig::new("back").icon_top_padding(4),
            bounds,
            &mut res,
        )
        .unwrap();
        let mut canvas = Canvas::new(32, 32);

        button.render(&mut canvas);
        // icon corner carries the icon's own background
        assert_eq!(canvas.pixel(4, 4), Some(theme.button_background));

        button.set_focus_state(FocusState::Focused);
        button.render(&mut canvas);
        assert_eq!(canvas.pixel(4, 4), Some(theme.button_selected));
    }

    #[test]
    fn test_missing_icon_fails_construction() {
        let mut res = Resources::builtin(Theme::default());
        let bounds = Rectangle::new(Point::zero(), Size::new(32, 32));
        assert!(matches!(
            IconButton::new(IconButtonConfig::new("camera"), bounds, &mut res),
            Err(GuiError::Resource { .. })
        ));
    }
}
