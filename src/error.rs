//! Error types for file processor operations.
//!
//! File access failures are classified into a small taxonomy so the
//! interactive prompts can answer each kind with its own message.

use std::path::Path;
use thiserror::Error;

/// Result type alias for file processor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// File access errors.
    #[error("{0}")]
    Io(#[from] IoError),

    /// Console input reached end of stream.
    #[error("input interrupted")]
    Interrupted,

    /// Writing to or reading from the terminal failed.
    #[error("console error: {0}")]
    Console(String),
}

/// File-specific errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// The process lacks permission to access the file.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// Path to the file.
        path: String,
    },

    /// File content is not valid UTF-8 text.
    #[error("cannot decode {path}: invalid UTF-8 at byte offset {offset}")]
    DecodeFailure {
        /// Path to the file.
        path: String,
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("{0}")]
    Generic(String),
}

impl IoError {
    /// Classifies a `std::io::Error` raised while accessing `path`.
    ///
    /// Missing files and permission problems get their own variants;
    /// everything else becomes [`IoError::Generic`].
    pub fn classify(path: &Path, err: &std::io::Error) -> Self {
        let path = path.to_string_lossy().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => Self::DecodeFailure { path, offset: 0 },
            _ => Self::Generic(format!("{path}: {err}")),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            return Self::Interrupted;
        }
        Self::Console(err.to_string())
    }
}
