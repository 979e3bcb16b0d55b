//! Text layout engine
//!
//! Breaks a string into lines that fit a box, positions each line
//! horizontally (centered or left-aligned) and centers the block vertically.
//!
//! # Algorithm
//!
//! 1. If the whole string fits the usable width (`box_width - 2 * edge_padding`)
//!    it becomes a single line.
//! 2. Otherwise the string is split on single spaces and each line takes the
//!    longest run of leading tokens that fits, found by bisection over the
//!    token count. A token wider than the box is placed alone on its line.
//! 3. The block height (`line_height * n + line_spacing * (n - 1)`) may exceed
//!    the box by at most `overflow_tolerance`; beyond that layout fails with
//!    [`GuiError::LayoutOverflow`].
//!
//! Layout is pure arithmetic over a [`TextMeasure`]; it never touches a canvas.
//!
//! # Example
//!
//! ```
//! use gui_system::font::Font;
//! use gui_system::text::{layout, LayoutParams};
//!
//! let font = Font::builtin(10); // 6x10 cells
//! let block = layout("Scan a QR code", &font, LayoutParams::new(64, 60, true))?;
//! assert_eq!(block.lines.len(), 2);
//! assert_eq!(block.lines[0].text, "Scan a");
//! # Ok::<(), gui_system::GuiError>(())
//! ```

use crate::config::{COMPONENT_PADDING, EDGE_PADDING};
use crate::error::{GuiError, Result};

/// Width and line-height measurement, implemented by [`crate::font::Font`].
pub trait TextMeasure {
    /// Advance width of `text` on a single line, in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Height of one line, in pixels.
    fn line_height(&self) -> u32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str) -> u32 {
        (**self).text_width(text)
    }

    fn line_height(&self) -> u32 {
        (**self).line_height()
    }
}

/// Box and spacing a layout runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Box width
    pub box_width: u32,
    /// Box height
    pub box_height: u32,
    /// Center each line horizontally; otherwise pin it to `edge_padding`
    pub centered: bool,
    /// Horizontal inset on both sides
    pub edge_padding: u32,
    /// How far the block may exceed `box_height` before layout fails
    pub overflow_tolerance: u32,
    /// Gap between consecutive lines
    pub line_spacing: u32,
}

impl LayoutParams {
    /// Box with the default paddings and no extra line spacing.
    pub const fn new(box_width: u32, box_height: u32, centered: bool) -> Self {
        Self {
            box_width,
            box_height,
            centered,
            edge_padding: EDGE_PADDING,
            overflow_tolerance: 2 * COMPONENT_PADDING,
            line_spacing: 0,
        }
    }

    /// Override the gap between lines.
    pub const fn with_line_spacing(mut self, line_spacing: u32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Override the horizontal inset.
    pub const fn with_edge_padding(mut self, edge_padding: u32) -> Self {
        self.edge_padding = edge_padding;
        self
    }

    /// Override the vertical overflow tolerance.
    pub const fn with_overflow_tolerance(mut self, overflow_tolerance: u32) -> Self {
        self.overflow_tolerance = overflow_tolerance;
        self
    }

    /// Width a line may occupy.
    pub const fn usable_width(&self) -> u32 {
        self.box_width.saturating_sub(2 * self.edge_padding)
    }
}

/// One laid-out line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Line content, without the space it was broken at
    pub text: String,
    /// Left edge relative to the box
    pub x: i32,
    /// Measured width
    pub width: u32,
}

/// The result of [`layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// Lines, top to bottom
    pub lines: Vec<TextLine>,
    /// Height of each line
    pub line_height: u32,
    /// Gap between lines
    pub line_spacing: u32,
    /// Top of the first line relative to the box
    pub y: i32,
}

impl TextBlock {
    /// Total block height.
    pub fn height(&self) -> u32 {
        block_height(self.lines.len(), self.line_height, self.line_spacing)
    }

    /// Top of line `index` relative to the box.
    pub fn line_y(&self, index: usize) -> i32 {
        let step = i64::from(self.line_height) + i64::from(self.line_spacing);
        let offset = i64::try_from(index).unwrap_or(i64::MAX).saturating_mul(step);
        i32::try_from(i64::from(self.y).saturating_add(offset)).unwrap_or(i32::MAX)
    }

    /// Line texts joined back with single spaces.
    pub fn joined(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Break `text` into lines that fit `params`.
pub fn layout<M: TextMeasure + ?Sized>(
    text: &str,
    font: &M,
    params: LayoutParams,
) -> Result<TextBlock> {
    let usable = params.usable_width();
    let line_height = font.line_height();

    let full_width = font.text_width(text);
    let lines = if full_width <= usable {
        vec![make_line(text.to_owned(), full_width, &params)]
    } else {
        let tokens: Vec<&str> = text.split(' ').collect();
        let mut lines = Vec::new();
        let mut rest = tokens.as_slice();
        while !rest.is_empty() {
            let count = longest_fitting_prefix(rest, font, usable).max(1);
            let (head, tail) = rest.split_at(count.min(rest.len()));
            let line = head.join(" ");
            let width = font.text_width(&line);
            lines.push(make_line(line, width, &params));
            rest = tail;
        }
        lines
    };

    let required = block_height(lines.len(), line_height, params.line_spacing);
    if required > params.box_height.saturating_add(params.overflow_tolerance) {
        return Err(GuiError::LayoutOverflow {
            box_width: params.box_width,
            box_height: params.box_height,
            required_height: required,
            tolerance: params.overflow_tolerance,
        });
    }

    tracing::debug!(
        lines = lines.len(),
        height = required,
        box_width = params.box_width,
        box_height = params.box_height,
        "text laid out"
    );

    Ok(TextBlock {
        lines,
        line_height,
        line_spacing: params.line_spacing,
        y: center_offset(params.box_height, required),
    })
}

/// Largest `n` such that the first `n` tokens, space-joined, fit `usable`.
///
/// Assumes width grows with token count. Returns 0 when even the first
/// token is too wide.
fn longest_fitting_prefix<M: TextMeasure + ?Sized>(tokens: &[&str], font: &M, usable: u32) -> usize {
    let (mut lo, mut hi) = (0, tokens.len());
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        let candidate = tokens.get(..mid).unwrap_or(tokens).join(" ");
        if font.text_width(&candidate) <= usable {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

fn make_line(text: String, width: u32, params: &LayoutParams) -> TextLine {
    let x = if params.centered {
        center_offset(params.box_width, width)
    } else {
        i32::try_from(params.edge_padding).unwrap_or(i32::MAX)
    };
    TextLine { text, x, width }
}

fn block_height(lines: usize, line_height: u32, line_spacing: u32) -> u32 {
    let n = u32::try_from(lines).unwrap_or(u32::MAX);
    line_height
        .saturating_mul(n)
        .saturating_add(line_spacing.saturating_mul(n.saturating_sub(1)))
}

/// Offset that centers `inner` in `outer`; negative when `inner` is larger.
pub(crate) fn center_offset(outer: u32, inner: u32) -> i32 {
    let diff = i64::from(outer) - i64::from(inner);
    i32::try_from(diff / 2).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10px per char, 20px lines.
    struct Fixed;

    impl TextMeasure for Fixed {
        fn text_width(&self, text: &str) -> u32 {
            10 * text.chars().count() as u32
        }

        fn line_height(&self) -> u32 {
            20
        }
    }

    #[test]
    fn test_short_text_is_one_centered_line() {
        let block = layout("Hello", &Fixed, LayoutParams::new(240, 100, true)).unwrap();
        assert_eq!(block.lines.len(), 1);
        assert_eq!(block.lines[0].x, 95);
        assert_eq!(block.lines[0].width, 50);
        assert_eq!(block.y, 40);
    }

    #[test]
    fn test_left_aligned_uses_edge_padding() {
        let block = layout("Hello", &Fixed, LayoutParams::new(240, 100, false)).unwrap();
        assert_eq!(block.lines[0].x, EDGE_PADDING as i32);
    }

    #[test]
    fn test_breaks_on_longest_fitting_prefix() {
        // 224px usable = 22 chars per line
        let text = "The quick brown fox jumps over the lazy dog";
        let params = LayoutParams::new(240, 100, true).with_line_spacing(4);
        let block = layout(text, &Fixed, params).unwrap();

        let lines: Vec<_> = block.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(lines, ["The quick brown fox", "jumps over the lazy", "dog"]);
        assert_eq!(block.joined(), text);
        assert_eq!(block.height(), 3 * 20 + 2 * 4);
        assert_eq!(block.y, 16);
        assert_eq!(block.line_y(2), 16 + 2 * 24);
    }

    #[test]
    fn test_oversized_token_gets_own_line() {
        let text = "a supercalifragilisticexpialidocious b";
        let block = layout(text, &Fixed, LayoutParams::new(240, 100, true)).unwrap();
        let lines: Vec<_> = block.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(lines, ["a", "supercalifragilisticexpialidocious", "b"]);
        // wider than the box, so centering goes negative
        assert!(block.lines[1].x < 0);
    }

    #[test]
    fn test_double_space_round_trips() {
        let text = "one  two three four five six seven";
        let block = layout(text, &Fixed, LayoutParams::new(120, 200, true)).unwrap();
        assert!(block.lines.len() > 1);
        assert_eq!(block.joined(), text);
    }

    #[test]
    fn test_overflow_respects_tolerance() {
        // Three 20px lines with no spacing = 60px
        let text = "aaaaaaaaaa bbbbbbbbbb cccccccccc";
        let params = LayoutParams::new(116, 44, true);
        assert_eq!(params.usable_width(), 100);

        let block = layout(text, &Fixed, params).unwrap();
        assert_eq!(block.height(), 60);
        assert_eq!(block.y, -8);

        let err = layout(text, &Fixed, LayoutParams::new(116, 43, true)).unwrap_err();
        assert!(matches!(
            err,
            GuiError::LayoutOverflow {
                required_height: 60,
                box_height: 43,
                tolerance: 16,
                ..
            }
        ));
    }

    #[test]
    fn test_single_line_can_overflow() {
        let params = LayoutParams::new(240, 2, true).with_overflow_tolerance(0);
        assert!(matches!(
            layout("Hi", &Fixed, params),
            Err(GuiError::LayoutOverflow { .. })
        ));
    }

    #[test]
    fn test_bisection_finds_exact_boundary() {
        let tokens = ["ab", "cd", "ef", "gh"];
        // "ab cd ef" = 8 chars
        assert_eq!(longest_fitting_prefix(&tokens, &Fixed, 80), 3);
        assert_eq!(longest_fitting_prefix(&tokens, &Fixed, 79), 2);
        assert_eq!(longest_fitting_prefix(&tokens, &Fixed, 19), 0);
        assert_eq!(longest_fitting_prefix(&tokens, &Fixed, 1000), 4);
    }

    #[test]
    fn test_empty_text() {
        let block = layout("", &Fixed, LayoutParams::new(240, 100, true)).unwrap();
        assert_eq!(block.lines.len(), 1);
        assert_eq!(block.lines[0].text, "");
    }
}
