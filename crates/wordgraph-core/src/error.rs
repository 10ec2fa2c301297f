//! Error types for the wordgraph system.
//!
//! All fallible operations report through the [`Error`] enum. Graph queries
//! themselves are total and never produce one; errors come from the edges of
//! the system (files, the walk log, the external renderer, configuration).

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all wordgraph operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text source not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid file path (empty, not a file, etc.)
    #[error("Invalid file path: {reason}")]
    InvalidPath { reason: String },

    /// Path resolves outside the allowed root
    #[error("Path traversal detected: {path}")]
    PathTraversalAttempt { path: PathBuf },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// External layout tool failed or is unavailable
    #[error("Render error: {reason}")]
    RenderError { reason: String },

    /// A walk step could not be persisted
    #[error("Walk log error: {reason}")]
    WalkLog { reason: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error
    pub fn io(err: io::Error) -> Self {
        Error::Io(err)
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(reason: impl Into<String>) -> Self {
        Error::InvalidPath {
            reason: reason.into(),
        }
    }

    /// Create a path traversal error
    pub fn path_traversal(path: impl Into<PathBuf>) -> Self {
        Error::PathTraversalAttempt { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a render error
    pub fn render_error(reason: impl Into<String>) -> Self {
        Error::RenderError {
            reason: reason.into(),
        }
    }

    /// Create a walk log error
    pub fn walk_log(reason: impl Into<String>) -> Self {
        Error::WalkLog {
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// True when the error is a security rejection rather than a missing file
    pub fn is_traversal(&self) -> bool {
        matches!(self, Error::PathTraversalAttempt { .. })
    }
}
