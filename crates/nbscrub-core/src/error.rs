//! Error types for nbscrub operations.
//!
//! Every failure that can happen while discovering or cleaning a notebook
//! is one of these variants. The batch driver treats all of them as
//! per-file failures and keeps going.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in nbscrub operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error tied to a specific path.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Progress or report output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// JSON parse or serialize error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document does not have the shape of a notebook.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Discovery pattern could not be compiled.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an I/O error carrying the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

impl From<glob::GlobError> for Error {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        Self::io_with_path(err.into(), path)
    }
}

/// Result type alias using nbscrub's Error type.
pub type Result<T> = std::result::Result<T, Error>;
