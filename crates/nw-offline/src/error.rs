//! Error types for the offline worker.

use std::path::PathBuf;

/// Result type for offline worker operations.
pub type OfflineResult<T> = Result<T, OfflineError>;

/// Errors that can occur while caching or serving assets.
#[derive(Debug, thiserror::Error)]
pub enum OfflineError {
    /// The network has no asset at this path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Reading an asset failed.
    #[error("i/o error reading {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An asset of the manifest could not be fetched during install.
    #[error("installation failed on {path}: {source}")]
    Install {
        /// The manifest path that failed.
        path: String,
        /// Why it failed.
        #[source]
        source: Box<OfflineError>,
    },
}
