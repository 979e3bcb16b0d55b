//! Display sink that writes every flushed frame to disk.

use std::path::{Path, PathBuf};

use image::RgbImage;
use platform::{DisplaySink, Frame};

/// Why a frame could not be written.
#[derive(Debug, thiserror::Error)]
pub enum PngDisplayError {
    /// The frame buffer does not match its stated size.
    #[error("frame buffer is not {width}x{height} RGB")]
    BadFrame {
        /// Stated width
        width: u32,
        /// Stated height
        height: u32,
    },
    /// Encoding or writing the PNG failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying error
        source: image::ImageError,
    },
}

/// Writes `frame_0000.png`, `frame_0001.png`, ... into a directory.
#[derive(Debug)]
pub struct PngDisplay {
    dir: PathBuf,
    frames: usize,
}

impl PngDisplay {
    /// Sink writing into `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            frames: 0,
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Path of the most recent frame.
    pub fn last_path(&self) -> Option<PathBuf> {
        self.frames.checked_sub(1).map(|n| self.frame_path(n))
    }

    fn frame_path(&self, n: usize) -> PathBuf {
        self.dir.join(format!("frame_{n:04}.png"))
    }
}

impl DisplaySink for PngDisplay {
    type Error = PngDisplayError;

    fn show(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
        let image = RgbImage::from_raw(frame.width, frame.height, frame.data.to_vec()).ok_or(
            PngDisplayError::BadFrame {
                width: frame.width,
                height: frame.height,
            },
        )?;
        let path = self.frame_path(self.frames);
        image
            .save(&path)
            .map_err(|source| PngDisplayError::Write {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "frame written");
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let mut display = PngDisplay::new(dir.path());
        let data = [200u8; 2 * 2 * 3];
        let frame = Frame {
            width: 2,
            height: 2,
            data: &data,
        };
        display.show(&frame).unwrap();
        display.show(&frame).unwrap();

        assert_eq!(display.frames(), 2);
        assert_eq!(display.last_path().unwrap(), dir.path().join("frame_0001.png"));
        let back = image::open(dir.path().join("frame_0000.png")).unwrap().to_rgb8();
        assert_eq!(back.get_pixel(1, 1).0, [200, 200, 200]);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut display = PngDisplay::new(dir.path());
        let data = [0u8; 5];
        let frame = Frame {
            width: 2,
            height: 2,
            data: &data,
        };
        assert!(matches!(
            display.show(&frame),
            Err(PngDisplayError::BadFrame { .. })
        ));
        assert_eq!(display.frames(), 0);
    }
}
