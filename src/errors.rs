use std::sync::Arc;
use thiserror::Error;

/// Why a color value could not be resolved to RGBA
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Name not present in the color table
    #[error("unknown color name: {0:?}")]
    UnknownName(Arc<String>),

    /// Value has the wrong structure or out-of-range components
    #[error("invalid color value: {0}")]
    InvalidValue(Arc<String>),
}

impl ColorError {
    pub(crate) fn unknown(name: &str) -> Self {
        ColorError::UnknownName(Arc::new(name.to_string()))
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ColorError::InvalidValue(Arc::new(message.into()))
    }
}

/// Errors that can occur while resizing, rendering or streaming a figure
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error resolving a color
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// A terminal query command could not be run or returned garbage
    #[error("Terminal query `{command}` failed: {message}")]
    TerminalQuery {
        command: Arc<String>,
        message: Arc<String>,
    },

    /// Window size was not of the form `<width>x<height>`
    #[error("Malformed window size {0:?}, expected <width>x<height>")]
    WindowSizeParse(Arc<String>),

    /// Row count was not an integer
    #[error("Malformed terminal row count {0:?}")]
    RowCountParse(Arc<String>),

    /// Terminal reported zero rows
    #[error("Terminal reported zero rows; cannot fit figure to window")]
    ZeroRows,

    /// Figure size is not a positive finite value
    #[error("Invalid figure size {width}x{height} inches")]
    InvalidFigureSize { width: f64, height: f64 },

    /// Object id does not belong to this figure
    #[error("Unknown object id {0}")]
    UnknownObject(usize),

    /// Raster could not be encoded
    #[error("Failed to encode image: {0}")]
    Encode(Arc<String>),

    /// External image command is not installed
    #[error("Image command `{0}` not found")]
    ToolMissing(Arc<String>),

    /// External image command exited unsuccessfully
    #[error("Image command `{command}` failed with {status}")]
    ToolFailed {
        command: Arc<String>,
        status: Arc<String>,
    },

    /// Writing the image to the command's stdin failed
    #[error("Failed to stream image to `{command}`: {message}")]
    Stream {
        command: Arc<String>,
        message: Arc<String>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(Arc<String>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with BackendError
pub type Result<T> = std::result::Result<T, BackendError>;

impl BackendError {
    pub(crate) fn query(command: &str, message: impl Into<String>) -> Self {
        BackendError::TerminalQuery {
            command: Arc::new(command.to_string()),
            message: Arc::new(message.into()),
        }
    }

    pub(crate) fn stream(command: &str, message: impl Into<String>) -> Self {
        BackendError::Stream {
            command: Arc::new(command.to_string()),
            message: Arc::new(message.into()),
        }
    }

    /// Whether this error came from talking to the terminal or its tools
    pub fn is_terminal_failure(&self) -> bool {
        matches!(
            self,
            BackendError::TerminalQuery { .. }
                | BackendError::WindowSizeParse(_)
                | BackendError::RowCountParse(_)
                | BackendError::ZeroRows
                | BackendError::ToolMissing(_)
                | BackendError::ToolFailed { .. }
                | BackendError::Stream { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BackendError::WindowSizeParse(Arc::new("80by24".to_string()));
        assert!(err.to_string().contains("80by24"));

        let err: BackendError = ColorError::unknown("chartreusey").into();
        assert!(err.to_string().contains("chartreusey"));
    }

    #[test]
    fn test_terminal_failure_classification() {
        assert!(BackendError::ZeroRows.is_terminal_failure());
        assert!(BackendError::query("tput lines", "no tty").is_terminal_failure());
        assert!(!BackendError::UnknownObject(3).is_terminal_failure());
        assert!(!BackendError::Encode(Arc::new("bad".into())).is_terminal_failure());
    }
}
