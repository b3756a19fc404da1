//! Error types for the core model.

use std::path::PathBuf;

/// Errors raised by a key-value storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend is disabled or otherwise refuses access.
    #[error("storage is unavailable")]
    Unavailable,

    /// Writing the value would exceed the backend's capacity.
    #[error("storage quota exceeded ({needed} of {limit} bytes)")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        needed: usize,
        /// Capacity of the store in bytes.
        limit: usize,
    },

    /// A filesystem operation failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur in core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Settings could not be written to storage.
    #[error("could not save settings: {0}")]
    Persistence(#[from] StorageError),

    /// Settings could not be encoded for storage.
    #[error("could not encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
