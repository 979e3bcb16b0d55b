//! Display abstraction layer

/// A finished frame, borrowed from the canvas for the duration of a flush.
///
/// Pixels are packed RGB888, row-major, no padding between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height * 3` bytes
    pub data: &'a [u8],
}

impl Frame<'_> {
    /// RGB triple at `(x, y)`, or `None` outside the frame.
    pub fn rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        let px = self.data.get(idx..idx + 3)?;
        Some([px[0], px[1], px[2]])
    }
}

/// Sink that pushes the canvas to physical output.
///
/// The UI core never touches the panel directly; everything it draws stays
/// in the canvas until [`DisplaySink::show`] is called.
pub trait DisplaySink {
    /// Error type for display operations
    type Error: core::fmt::Debug;

    /// Push the whole frame to the display.
    fn show(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    type Error = T::Error;

    fn show(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
        (**self).show(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn test_frame_rgb_lookup() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let frame = Frame {
            width: 2,
            height: 2,
            data: &data,
        };
        assert_eq!(frame.rgb(1, 0), Some([4, 5, 6]));
        assert_eq!(frame.rgb(0, 1), Some([7, 8, 9]));
        assert_eq!(frame.rgb(2, 0), None);
    }

    #[test]
    fn test_frame_rgb_short_buffer() {
        let data = [0u8; 5];
        let frame = Frame {
            width: 2,
            height: 1,
            data: &data,
        };
        assert_eq!(frame.rgb(1, 0), None);
    }
}
