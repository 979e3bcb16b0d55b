//! Components rendered through the test harness.
//!
//! Run: cargo test -p gui-components --test component_render

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use gui_components::prelude::*;
use gui_system::prelude::*;
use gui_testing::TestHarness;

#[test]
fn button_swaps_colors_with_focus() {
    let mut t = TestHarness::new();
    let bounds = Rectangle::new(Point::new(8, 60), Size::new(224, 36));
    let mut button = Button::new(ButtonConfig::new("Scan"), bounds, t.resources()).unwrap();
    let theme = *t.theme();

    button.render(t.canvas_mut());
    t.assert_pixel(10, 78, theme.button_background).unwrap();
    t.assert_region_contains(bounds, theme.font_color).unwrap();

    button.set_focus_state(FocusState::Focused);
    button.render(t.canvas_mut());
    t.assert_pixel(10, 78, theme.button_selected).unwrap();
    t.assert_region_contains(bounds, theme.selected_font_color).unwrap();
    assert_eq!(t.pixel_count_of_color(bounds, theme.font_color), 0);
}

#[test]
fn button_leaves_outside_untouched() {
    let mut t = TestHarness::new();
    let bounds = Rectangle::new(Point::new(8, 60), Size::new(224, 36));
    let button = Button::new(ButtonConfig::new("Scan"), bounds, t.resources()).unwrap();
    let background = t.theme().background;

    button.render(t.canvas_mut());
    t.assert_region_uniform(Rectangle::new(Point::zero(), Size::new(240, 60)), background)
        .unwrap();
    t.assert_region_uniform(Rectangle::new(Point::new(0, 96), Size::new(240, 144)), background)
        .unwrap();
}

#[test]
fn top_nav_places_power_button_on_the_right() {
    let mut t = TestHarness::new();
    let config = TopNavConfig::new("Home").back_button(false).power_button(true);
    let mut nav = TopNav::new(config, 240, t.resources()).unwrap();
    let theme = *t.theme();
    nav.set_focus_state(FocusState::Focused);
    nav.render(t.canvas_mut());

    // power button spans x 200..232; its left edge column is button fill
    t.assert_pixel(201, 24, theme.button_selected).unwrap();
    // no back button
    t.assert_pixel(9, 24, theme.top_nav_background).unwrap();
    assert_eq!(nav.selected_action(), Some(NavAction::Power));
}

#[test]
fn supersampled_text_area_stays_in_bounds() {
    let mut t = TestHarness::new();
    t.canvas_mut().fill(Rgb888::new(1, 2, 3));
    let bounds = Rectangle::new(Point::new(20, 60), Size::new(200, 100));
    let area = TextArea::new(
        TextAreaConfig::new("The quick brown fox jumps over the lazy dog"),
        bounds,
        t.resources(),
    )
    .unwrap();
    area.render(t.canvas_mut());

    let marker = Rgb888::new(1, 2, 3);
    t.assert_region_uniform(Rectangle::new(Point::zero(), Size::new(240, 60)), marker)
        .unwrap();
    t.assert_region_uniform(Rectangle::new(Point::new(0, 160), Size::new(240, 80)), marker)
        .unwrap();
    assert_eq!(t.pixel_count_of_color(bounds, marker), 0);
}
