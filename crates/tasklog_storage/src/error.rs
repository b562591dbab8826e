//! Error types for storage operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The path cannot name a record file.
    #[error("invalid record file path: {}", path.display())]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// The backend refused the write (fault injection).
    #[error("write rejected by backend")]
    WriteRejected,
}
