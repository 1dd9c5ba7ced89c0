//! Eml Export Core Library
//!
//! This library downloads a single email message (an "eml" artifact) from a
//! backend mail repository and saves it to local storage under a filename
//! derived from its mail key.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - Backend API client and the mail-subsystem download surface
//! - [`export`] - The exporter composing the download and save capabilities
//! - [`save`] - Save-to-disk primitive behind a capability trait

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod export;
pub mod save;

// Re-export commonly used types
pub use api::{ApiError, EsnClient, JamesApi, MailRepositoryApi};
pub use export::{
    Blob, ConfigError, EML_MEDIA_TYPE, EmlExporter, EmlExporterBuilder, ExportError, eml_filename,
};
pub use save::{DiskSaver, SaveError, SaveFile};
