//! Error types for backend API calls.
//!
//! Structured errors for the client stack, providing context-rich messages
//! for debugging and user feedback.

use thiserror::Error;

/// Errors that can occur while calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout requesting {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} requesting {url}")]
    Status {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Error detail reported by the backend, if any.
        detail: Option<String>,
    },

    /// The configured base URL or a derived endpoint is malformed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },
}

impl ApiError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
            detail: None,
        }
    }

    /// Creates an HTTP status error carrying a backend-supplied detail message.
    pub fn status_with_detail(
        url: impl Into<String>,
        status: u16,
        detail: Option<String>,
    ) -> Self {
        Self::Status {
            url: url.into(),
            status,
            detail,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` because our error
// variants require context (the request URL) that the source error does not
// reliably provide. The helper constructor methods are the pattern here.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_timeout_display() {
        let error = ApiError::timeout("http://esn.example/api/james");
        assert!(error.to_string().contains("timeout"));
        assert!(error.to_string().contains("http://esn.example/api/james"));
    }

    #[test]
    fn test_api_error_status_display() {
        let error = ApiError::status("http://esn.example/api/james", 404);
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected '404' in: {msg}");
        assert!(
            msg.contains("http://esn.example/api/james"),
            "Expected URL in: {msg}"
        );
    }

    #[test]
    fn test_api_error_status_with_detail_keeps_detail() {
        let error = ApiError::status_with_detail(
            "http://esn.example/api/james",
            500,
            Some("repository not mounted".to_string()),
        );
        match error {
            ApiError::Status { detail, status, .. } => {
                assert_eq!(status, 500);
                assert_eq!(detail.as_deref(), Some("repository not mounted"));
            }
            other => panic!("Expected Status variant, got: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_invalid_url_display() {
        let error = ApiError::invalid_url("not-a-url");
        let msg = error.to_string();
        assert!(msg.contains("invalid URL"), "Expected 'invalid URL' in: {msg}");
        assert!(msg.contains("not-a-url"), "Expected URL in: {msg}");
    }
}
