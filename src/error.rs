//! Unified error types for splitview
//!
//! Component-level failures (listing a directory, reading a file) never reach
//! this type: they are converted into on-screen state where they happen.
//! What remains are the failures that stop the program from starting or
//! drawing.

use std::path::PathBuf;

/// Unified error type for splitview operations
#[derive(Debug, thiserror::Error)]
pub enum SplitviewError {
    /// I/O errors (terminal, filesystem setup)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file errors
    #[error("Config error: {path} - {reason}")]
    Config { path: PathBuf, reason: String },

    /// Invalid command-line usage
    #[error("{0}")]
    Usage(String),

    /// Terminal driver failures (setup, draw, restore)
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Convenience Result type using SplitviewError
pub type Result<T> = std::result::Result<T, SplitviewError>;

impl SplitviewError {
    /// Create a Config error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Create a Terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitviewError::config("/etc/sv.toml", "expected a table");
        assert_eq!(
            format!("{}", err),
            "Config error: /etc/sv.toml - expected a table"
        );

        let err = SplitviewError::usage("Unknown option: --nope");
        assert_eq!(format!("{}", err), "Unknown option: --nope");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SplitviewError = io_err.into();
        assert!(matches!(err, SplitviewError::Io(_)));
    }
}
