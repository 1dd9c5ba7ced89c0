//! Error types for exporter construction and the export operation.

use thiserror::Error;

use crate::api::ApiError;
use crate::save::SaveError;

/// Construction-time errors: a required collaborator was not supplied.
///
/// These are fail-fast and synchronous; no exporter value exists once one
/// of them is returned. The messages match the reference contract exactly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No backend API handle was supplied to the builder.
    #[error("esnApiClient is required and must be an instance of Client")]
    MissingApiClient,

    /// No save capability was supplied to the builder.
    #[error("saveAs is required and must be a function")]
    MissingSaveAs,
}

/// Errors surfaced by the export operation.
///
/// The exporter performs no error translation: both variants are
/// transparent, so message and source identity are those of the
/// collaborator that failed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The backend download failed; the save capability was never invoked.
    #[error(transparent)]
    Download(#[from] ApiError),

    /// The save capability failed after a successful download.
    #[error(transparent)]
    Save(#[from] SaveError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_error_messages_match_reference_contract() {
        assert_eq!(
            ConfigError::MissingApiClient.to_string(),
            "esnApiClient is required and must be an instance of Client"
        );
        assert_eq!(
            ConfigError::MissingSaveAs.to_string(),
            "saveAs is required and must be a function"
        );
    }

    #[test]
    fn test_export_error_is_transparent_over_download_failure() {
        let inner = ApiError::timeout("http://esn.example/api/james");
        let expected = inner.to_string();
        let wrapped = ExportError::from(inner);
        assert_eq!(wrapped.to_string(), expected);
    }

    #[test]
    fn test_export_error_is_transparent_over_save_failure() {
        let inner = SaveError::io(
            PathBuf::from("/out/key.eml"),
            std::io::Error::other("disk full"),
        );
        let expected = inner.to_string();
        let wrapped = ExportError::from(inner);
        assert_eq!(wrapped.to_string(), expected);
    }
}
