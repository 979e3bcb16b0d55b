//! Error taxonomy
//!
//! Resource, layout and configuration errors are construction-time failures:
//! a screen that cannot be built is never shown. Display and input errors can
//! only surface from a running screen loop.

use std::path::PathBuf;

use platform::InputError;

/// Every error the UI core reports.
#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    /// A font or icon file is missing or cannot be decoded.
    #[error("resource `{name}` unavailable ({}): {reason}", path.display())]
    Resource {
        /// Font family or icon name that was requested
        name: String,
        /// Where it was looked for
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Text cannot fit in its box at the requested font and size.
    #[error(
        "text needs {required_height}px but box is {box_width}x{box_height} \
         (+{tolerance}px tolerance)"
    )]
    LayoutOverflow {
        /// Box width, in layout coordinates
        box_width: u32,
        /// Box height, in layout coordinates
        box_height: u32,
        /// Height the wrapped text block would need
        required_height: u32,
        /// Slack allowed beyond `box_height`
        tolerance: u32,
    },

    /// A component or screen was configured with values it cannot honour.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Flushing the canvas to the display failed.
    #[error("display flush failed: {0}")]
    Display(String),

    /// The input source can no longer deliver key events.
    #[error(transparent)]
    Input(#[from] InputError),
}

impl GuiError {
    /// Shorthand for a [`GuiError::Resource`].
    pub fn resource(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        GuiError::Resource {
            name: name.into(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for a [`GuiError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        GuiError::Configuration(message.into())
    }
}

/// Result alias used throughout the UI crates.
pub type Result<T> = core::result::Result<T, GuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_message_names_path() {
        let err = GuiError::resource("OpenSans-Regular", "/fonts/OpenSans-Regular.ttf", "not found");
        let msg = err.to_string();
        assert!(msg.contains("OpenSans-Regular"));
        assert!(msg.contains("/fonts/OpenSans-Regular.ttf"));
    }

    #[test]
    fn test_input_error_converts() {
        let err: GuiError = InputError::Closed.into();
        assert!(matches!(err, GuiError::Input(InputError::Closed)));
    }
}
