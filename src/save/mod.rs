//! Save-to-disk primitive behind a capability trait.
//!
//! The exporter persists downloaded content through [`SaveFile`], a
//! single-method capability: "save this blob under this name". The
//! shipped implementation is [`DiskSaver`]; hosts with other storage
//! (or tests with recording fakes) inject their own.

mod disk;

pub use disk::DiskSaver;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::export::Blob;

/// Capability trait for persisting a blob under a filename.
///
/// # Object Safety
///
/// Uses `async_trait` to support dynamic dispatch via `Arc<dyn SaveFile>`.
#[async_trait]
pub trait SaveFile: Send + Sync {
    /// Persists `blob` under `filename` and returns the location it was
    /// written to.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the content could not be persisted.
    async fn save(&self, blob: &Blob, filename: &str) -> Result<PathBuf, SaveError>;
}

/// Errors that can occur while persisting a blob.
#[derive(Debug, Error)]
pub enum SaveError {
    /// File system error (create directory, write, etc.)
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The requested filename cannot name a file in the target directory.
    #[error("invalid filename: {filename}")]
    InvalidFilename {
        /// The rejected filename.
        filename: String,
    },
}

impl SaveError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid filename error.
    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }
}
