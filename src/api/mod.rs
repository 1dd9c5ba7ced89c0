//! Backend API surface for the mail subsystem.
//!
//! This module provides the client stack used to talk to the backend that
//! hosts mail repositories:
//!
//! - [`EsnClient`] - HTTP client bound to the backend base URL
//! - [`JamesApi`] - mail-subsystem sub-handle derived from an [`EsnClient`]
//! - [`MailRepositoryApi`] - capability trait describing "can download an
//!   eml by domain/repository/key"
//! - [`ApiError`] - structured errors for backend calls

mod client;
mod error;
mod james;

pub use client::EsnClient;
pub use error::ApiError;
pub use james::JamesApi;

use async_trait::async_trait;

/// Capability trait for downloading a stored message from a mail repository.
///
/// The exporter depends on this trait rather than on a concrete client, so
/// any backend (or test double) that can fetch an eml by
/// (domain, repository, key) can be injected.
///
/// # Object Safety
///
/// This trait uses `async_trait` to support dynamic dispatch via
/// `Box<dyn MailRepositoryApi>`. Rust 2024 native async traits are not
/// object-safe, so `async_trait` is required here.
#[async_trait]
pub trait MailRepositoryApi: Send + Sync {
    /// Downloads the raw eml content of one message.
    ///
    /// The three identifiers are passed through verbatim; no format
    /// validation is performed at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend call fails.
    async fn download_eml_file_from_mail_repository(
        &self,
        domain_id: &str,
        mail_repository: &str,
        mail_key: &str,
    ) -> Result<Vec<u8>, ApiError>;
}
