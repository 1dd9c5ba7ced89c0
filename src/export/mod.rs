//! The exporter: compose a mail-repository download with a save.
//!
//! [`EmlExporter`] holds the two injected capabilities - a mail-subsystem
//! API handle and a save primitive - and exposes one operation that
//! downloads a message's raw eml content, wraps it as a [`Blob`], and
//! persists it under `<mailKey>.eml`. Failures from either capability
//! propagate unchanged.

mod blob;
mod error;

pub use blob::{Blob, EML_MEDIA_TYPE, eml_filename};
pub use error::{ConfigError, ExportError};

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::api::{EsnClient, JamesApi, MailRepositoryApi};
use crate::save::SaveFile;

/// Downloads eml messages from a mail repository and saves them locally.
///
/// Built once at wiring time via [`EmlExporter::builder`]; holds no mutable
/// state, so concurrent invocations on one instance are independent.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use eml_export_core::{DiskSaver, EmlExporter, EsnClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EsnClient::new("https://esn.example.com/api")?;
/// let exporter = EmlExporter::builder()
///     .esn_api_client(client)
///     .save_as(Arc::new(DiskSaver::new("./exports")))
///     .build()?;
///
/// let saved = exporter
///     .download_eml_file_from_mail_repository("domainId", "var/mail/error", "mail-key-1")
///     .await?;
/// println!("Saved to: {}", saved.display());
/// # Ok(())
/// # }
/// ```
pub struct EmlExporter {
    mail_api: Box<dyn MailRepositoryApi>,
    save_as: Arc<dyn SaveFile>,
}

impl EmlExporter {
    /// Returns a builder for wiring the two required capabilities.
    #[must_use]
    pub fn builder() -> EmlExporterBuilder {
        EmlExporterBuilder::default()
    }

    /// Downloads one message's raw eml content and saves it as
    /// `<mail_key>.eml`.
    ///
    /// The three identifiers are passed through verbatim. The two steps run
    /// sequentially with no retry and no caching; the result is whatever
    /// the save capability resolved with.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Download`] if the backend call fails (the
    /// save capability is never invoked), or [`ExportError::Save`] if
    /// persisting fails. Either way the collaborator's failure is
    /// propagated unaltered.
    #[instrument(skip(self))]
    pub async fn download_eml_file_from_mail_repository(
        &self,
        domain_id: &str,
        mail_repository: &str,
        mail_key: &str,
    ) -> Result<PathBuf, ExportError> {
        let content = self
            .mail_api
            .download_eml_file_from_mail_repository(domain_id, mail_repository, mail_key)
            .await?;
        debug!(bytes = content.len(), "eml content downloaded");

        let blob = Blob::new(content, EML_MEDIA_TYPE);
        let path = self.save_as.save(&blob, &eml_filename(mail_key)).await?;
        debug!(path = %path.display(), "eml saved");

        Ok(path)
    }
}

/// Builder for [`EmlExporter`].
///
/// Both capabilities are required; [`build`](Self::build) fails fast if
/// either is missing, and no partially-constructed exporter exists.
#[derive(Default)]
pub struct EmlExporterBuilder {
    mail_api: Option<Box<dyn MailRepositoryApi>>,
    save_as: Option<Arc<dyn SaveFile>>,
}

impl EmlExporterBuilder {
    /// Supplies the backend client; the mail-subsystem handle is derived
    /// from it exactly once, here.
    #[must_use]
    pub fn esn_api_client(mut self, client: EsnClient) -> Self {
        self.mail_api = Some(Box::new(JamesApi::new(client)));
        self
    }

    /// Supplies a mail-subsystem capability directly (alternate backends,
    /// test doubles).
    #[must_use]
    pub fn mail_api(mut self, api: Box<dyn MailRepositoryApi>) -> Self {
        self.mail_api = Some(api);
        self
    }

    /// Supplies the save capability.
    #[must_use]
    pub fn save_as(mut self, save_as: Arc<dyn SaveFile>) -> Self {
        self.save_as = Some(save_as);
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiClient`] when no backend capability
    /// was supplied, then [`ConfigError::MissingSaveAs`] when no save
    /// capability was supplied.
    pub fn build(self) -> Result<EmlExporter, ConfigError> {
        let mail_api = self.mail_api.ok_or(ConfigError::MissingApiClient)?;
        let save_as = self.save_as.ok_or(ConfigError::MissingSaveAs)?;
        Ok(EmlExporter { mail_api, save_as })
    }
}
