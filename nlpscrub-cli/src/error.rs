//! Error handling for the CLI application

use std::io;
use std::path::PathBuf;

use nlpscrub_core::ProcessingError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed
    #[error("Failed to {action} file: {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Processing error from core
    #[error("Processing error: {0}")]
    Processing(#[from] ProcessingError),
}

impl CliError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            action: "write",
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
