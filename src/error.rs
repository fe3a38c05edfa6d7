//! Error types for the NewsRank client.
//!
//! Every non-2xx API response is classified by status code into one of the
//! [`Error`] variants carrying an [`ApiFailure`]. Connection-level faults
//! (DNS, refused connection, timeout) surface as [`Error::Transport`] and
//! carry no status code.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Convenience alias used by every client operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Raw response body attached to a classified API failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body as raw text (was not valid JSON).
    Text(String),
}

/// Details shared by every status-classified API failure.
///
/// `message` is extracted best-effort from the response body (a string
/// `error` field, then a string `message` field, then a status-code
/// fallback); extraction never fails on a malformed body.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    /// Human-readable error message.
    pub message: String,
    /// The HTTP status code returned by the API.
    pub status: u16,
    /// The raw response body, if there was one.
    pub body: Option<ErrorBody>,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.message, self.status)
    }
}

/// Errors returned by NewsRank API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key is invalid or missing (HTTP 401).
    #[error("{0}")]
    Authentication(ApiFailure),

    /// The API key lacks the required permissions (HTTP 403).
    #[error("{0}")]
    Permission(ApiFailure),

    /// The requested resource does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(ApiFailure),

    /// The rate limit has been exceeded (HTTP 429).
    #[error("{0}")]
    RateLimit(ApiFailure),

    /// The API returned a server error (HTTP 5xx).
    #[error("{0}")]
    Server(ApiFailure),

    /// Any other non-success API response.
    #[error("{0}")]
    Api(ApiFailure),

    /// Connection-level fault before any HTTP status was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The base-URL override could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl Error {
    /// The HTTP status code, or `None` for errors raised before a status
    /// was received (transport faults, decode failures, configuration).
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.failure().map(|failure| failure.status)
    }

    /// The raw response body attached to a classified API failure.
    #[must_use]
    pub fn body(&self) -> Option<&ErrorBody> {
        self.failure().and_then(|failure| failure.body.as_ref())
    }

    /// Returns `true` for an authentication failure (HTTP 401).
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Returns `true` for a permission failure (HTTP 403).
    #[must_use]
    pub fn is_permission(&self) -> bool {
        matches!(self, Self::Permission(_))
    }

    /// Returns `true` for a missing resource (HTTP 404).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for a rate-limit rejection (HTTP 429).
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit(_))
    }

    /// Returns `true` for a server-side failure (HTTP 5xx).
    #[must_use]
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Authentication(failure)
            | Self::Permission(failure)
            | Self::NotFound(failure)
            | Self::RateLimit(failure)
            | Self::Server(failure)
            | Self::Api(failure) => Some(failure),
            Self::Transport(_) | Self::Decode(_) | Self::InvalidBaseUrl(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn failure(status: u16) -> ApiFailure {
        ApiFailure {
            message: format!("API request failed with status {status}"),
            status,
            body: None,
        }
    }

    #[test]
    fn test_status_code_present_for_classified_errors() {
        let error = Error::RateLimit(failure(429));
        assert_eq!(error.status_code(), Some(429));
    }

    #[test]
    fn test_status_code_absent_for_decode_errors() {
        let source = serde_json::from_str::<Value>("not json").unwrap_err();
        let error = Error::Decode(source);
        assert_eq!(error.status_code(), None);
        assert!(error.body().is_none());
    }

    #[test]
    fn test_body_accessor_returns_attached_body() {
        let error = Error::NotFound(ApiFailure {
            message: "missing".to_string(),
            status: 404,
            body: Some(ErrorBody::Text("not found".to_string())),
        });
        assert_eq!(
            error.body(),
            Some(&ErrorBody::Text("not found".to_string()))
        );
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Error::Authentication(failure(401)).is_authentication());
        assert!(Error::Permission(failure(403)).is_permission());
        assert!(Error::NotFound(failure(404)).is_not_found());
        assert!(Error::RateLimit(failure(429)).is_rate_limit());
        assert!(Error::Server(failure(500)).is_server());
        assert!(!Error::Api(failure(418)).is_server());
    }

    #[test]
    fn test_display_includes_message_and_status() {
        let error = Error::RateLimit(ApiFailure {
            message: "rate limited".to_string(),
            status: 429,
            body: None,
        });
        let rendered = error.to_string();
        assert!(rendered.contains("rate limited"), "got: {rendered}");
        assert!(rendered.contains("429"), "got: {rendered}");
    }
}
