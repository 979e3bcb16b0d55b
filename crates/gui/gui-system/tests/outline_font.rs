//! Outline fonts loaded from a real `.ttf` file.
//!
//! Run: cargo test -p gui-system --test outline_font

use std::rc::Rc;

use gui_system::font::FontCache;
use gui_system::text::{layout, LayoutParams, TextMeasure};

const FONT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fonts");
const FAMILY: &str = "DejaVuSans";

#[test]
fn repeated_lookups_share_one_handle() {
    let mut fonts = FontCache::new(FONT_DIR);
    let a = fonts.get_font(FAMILY, 17).unwrap();
    let b = fonts.get_font(FAMILY, 17).unwrap();
    assert!(Rc::ptr_eq(&a, &b));
    assert!(!a.is_builtin());
    assert_eq!(a.size(), 17);

    let larger = fonts.get_font(FAMILY, 34).unwrap();
    assert!(!Rc::ptr_eq(&a, &larger));
    assert!(larger.line_height() > a.line_height());
}

#[test]
fn outline_metrics_are_sane() {
    let mut fonts = FontCache::new(FONT_DIR);
    let font = fonts.get_font(FAMILY, 18).unwrap();
    let m = font.metrics();
    assert!(m.ascent > m.descent);
    assert!(font.text_width("WWWW") > font.text_width("iiii"));
    assert_eq!(font.text_width(""), 0);

    // Capitals start below the top of the line.
    let ink = font.ink_offset("SCAN");
    assert!(ink.y > 0);
    assert!(ink.y < m.ascent as i32);
}

#[test]
fn short_text_stays_on_one_line() {
    let mut fonts = FontCache::new(FONT_DIR);
    let font = fonts.get_font(FAMILY, 34).unwrap();
    let block = layout("Sign", &*font, LayoutParams::new(480, 800, true)).unwrap();
    assert_eq!(block.lines.len(), 1);
    assert_eq!(block.lines[0].text, "Sign");
}

#[test]
fn long_text_breaks_into_fitting_lines() {
    let mut fonts = FontCache::new(FONT_DIR);
    let font = fonts.get_font(FAMILY, 34).unwrap();
    let text = "Confirm that the receiving address shown here matches the one on your \
                other screen before approving this transaction";
    let params = LayoutParams::new(480, 800, false);
    let block = layout(text, &*font, params).unwrap();

    assert!(block.lines.len() > 1);
    assert_eq!(block.joined(), text);
    for line in &block.lines {
        let single_token = !line.text.contains(' ');
        assert!(
            single_token || font.text_width(&line.text) <= params.usable_width(),
            "{:?} is {} px wide",
            line.text,
            font.text_width(&line.text)
        );
    }
}
