//! HTTP client for the backend API.
//!
//! [`EsnClient`] wraps a reqwest client bound to the backend base URL with
//! proper timeout configuration and optional basic-auth credentials. It is
//! designed to be created once at wiring time and shared by the API
//! sub-handles derived from it.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use super::error::ApiError;

/// Default connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default read timeout in seconds. Generous because stored messages can
/// carry large attachments.
pub const READ_TIMEOUT_SECS: u64 = 300;

/// HTTP client bound to the backend base URL.
///
/// Cloning is cheap: the underlying reqwest client shares its connection
/// pool across clones.
///
/// # Example
///
/// ```no_run
/// use eml_export_core::api::EsnClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EsnClient::new("https://esn.example.com/api")?
///     .with_basic_auth("admin@open-paas.org", "secret");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EsnClient {
    http: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

impl EsnClient {
    /// Creates a new client for the given backend base URL with default
    /// timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` cannot be parsed or
    /// cannot serve as a base for endpoint paths.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::new_with_timeouts(base_url, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new client with explicit timeout values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` cannot be parsed or
    /// cannot serve as a base for endpoint paths.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration. This should never happen in practice.
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(
        base_url: &str,
        connect_timeout_secs: u64,
        read_timeout_secs: u64,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|_| ApiError::invalid_url(base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::invalid_url(base_url.as_str()));
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");

        Ok(Self {
            http,
            base_url,
            credentials: None,
        })
    }

    /// Attaches basic-auth credentials sent with every request.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Returns the backend base URL this client is bound to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL by appending path segments to the base URL.
    ///
    /// Each segment is percent-encoded, so identifiers containing `/` or
    /// other reserved characters travel as a single segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::invalid_url(self.base_url.as_str()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a GET request for the given endpoint segments and returns the
    /// raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Timeout`] when the request times out,
    /// [`ApiError::Network`] for transport failures, and
    /// [`ApiError::Status`] (carrying any backend-supplied error detail)
    /// for non-2xx responses.
    #[instrument(level = "debug", skip(self))]
    pub(crate) async fn get_bytes(&self, segments: &[&str]) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "sending backend request");

        let mut request = self.http.get(url.clone());
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout(url.as_str())
            } else {
                ApiError::network(url.as_str(), e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = backend_error_detail(response).await;
            return Err(ApiError::status_with_detail(
                url.as_str(),
                status.as_u16(),
                detail,
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(url.as_str(), e))?;

        debug!(url = %url, bytes = body.len(), "backend request complete");
        Ok(body.to_vec())
    }
}

/// Error body shape returned by the backend for failed requests.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: Option<BackendError>,
}

#[derive(Debug, Deserialize)]
struct BackendError {
    message: Option<String>,
    details: Option<String>,
}

/// Extracts the backend-supplied error detail from a failed response, if the
/// body carries the standard JSON error shape.
async fn backend_error_detail(response: reqwest::Response) -> Option<String> {
    let body: BackendErrorBody = response.json().await.ok()?;
    let error = body.error?;
    error.details.or(error.message)
}
