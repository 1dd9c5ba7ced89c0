//! Mail-subsystem API handle.
//!
//! [`JamesApi`] is the sub-handle scoped to the backend's James mail
//! subsystem, derived from an [`EsnClient`]. It exposes the one operation
//! the exporter needs: downloading a stored message's raw eml content.

use async_trait::async_trait;
use tracing::instrument;

use super::client::EsnClient;
use super::error::ApiError;
use super::MailRepositoryApi;

/// Mail-subsystem API handle derived from a backend client.
#[derive(Debug, Clone)]
pub struct JamesApi {
    client: EsnClient,
}

impl JamesApi {
    /// Derives a mail-subsystem handle from a backend client.
    #[must_use]
    pub fn new(client: EsnClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MailRepositoryApi for JamesApi {
    /// Downloads the raw eml content of one message from a mail repository.
    ///
    /// Issues a single GET with no retry. Identifiers are placed as
    /// percent-encoded path segments, so repository names containing `/`
    /// travel as one segment.
    #[instrument(level = "debug", skip(self))]
    async fn download_eml_file_from_mail_repository(
        &self,
        domain_id: &str,
        mail_repository: &str,
        mail_key: &str,
    ) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_bytes(&[
                "james",
                "domains",
                domain_id,
                "mailRepositories",
                mail_repository,
                "mails",
                mail_key,
                "download",
            ])
            .await
    }
}
