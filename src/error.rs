//! Error types and handling infrastructure for rovctl.
//!
//! `thiserror` for the library error enum, `anyhow` at the binary boundary.
//! Link-level failures observed by the worker (refused connection, remote
//! close, transport errors) are terminal observations reported on its event
//! channel as display strings, not errors to propagate, so the enum only
//! carries the conditions callers actually bubble up.

use thiserror::Error;

/// The main error type for rovctl operations.
#[derive(Error, Debug)]
pub enum RovctlError {
    /// The link worker or its command channel went away underneath the app loop
    #[error("Link failed: {message}")]
    LinkError { message: String },

    /// IO errors from terminal setup, teardown, and input polling
    #[error("IO operation failed: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for rovctl operations.
pub type Result<T> = std::result::Result<T, RovctlError>;

impl RovctlError {
    /// Create a LinkError with a descriptive message
    pub fn link(message: impl Into<String>) -> Self {
        Self::LinkError {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to RovctlError
impl From<std::io::Error> for RovctlError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            message: "IO operation failed".to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let link_err = RovctlError::link("link worker unavailable");
        assert_eq!(link_err.to_string(), "Link failed: link worker unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RovctlError = io_err.into();

        match err {
            RovctlError::IoError { message, .. } => {
                assert_eq!(message, "IO operation failed");
            }
            _ => panic!("Expected IoError variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u16> {
            Ok(81)
        }

        assert_eq!(returns_result().unwrap(), 81);
    }
}
