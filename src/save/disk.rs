//! Disk-backed implementation of the save capability.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{SaveError, SaveFile};
use crate::export::Blob;

/// Saves blobs as files in a fixed output directory.
///
/// The directory is created on first save if it does not exist. Filenames
/// must be bare names; anything that would escape the output directory is
/// rejected.
#[derive(Debug, Clone)]
pub struct DiskSaver {
    output_dir: PathBuf,
}

impl DiskSaver {
    /// Creates a saver that writes into `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the directory this saver writes into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl SaveFile for DiskSaver {
    #[instrument(level = "debug", skip(self, blob), fields(bytes = blob.content().len()))]
    async fn save(&self, blob: &Blob, filename: &str) -> Result<PathBuf, SaveError> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename == "."
            || filename == ".."
        {
            return Err(SaveError::invalid_filename(filename));
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| SaveError::io(self.output_dir.clone(), e))?;

        let path = self.output_dir.join(filename);
        tokio::fs::write(&path, blob.content())
            .await
            .map_err(|e| SaveError::io(path.clone(), e))?;

        debug!(path = %path.display(), "blob saved");
        Ok(path)
    }
}
