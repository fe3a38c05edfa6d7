//! Shared request-shaping and error-classification logic.
//!
//! Both transport flavors ([`crate::Transport`] and
//! [`crate::blocking::Transport`]) delegate here so URL normalization, query
//! cleaning, status classification, and error-message extraction are written
//! and tested exactly once. Only the call-and-await boundary differs between
//! the flavors.

use std::fmt::Display;
use std::time::Duration;

use serde_json::Value;

use crate::error::{ApiFailure, Error, ErrorBody, Result};

/// Default NewsRank API base URL.
pub(crate) const DEFAULT_BASE_URL: &str = "https://newsrank.ai/api/v1";

/// Default request timeout for an owned connection pool.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent by owned connection pools (identifies the client).
pub(crate) const USER_AGENT: &str = concat!("newsrank-rust/", env!("CARGO_PKG_VERSION"));

/// Strips trailing slashes so paths can be appended verbatim.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Whether a transport owns its connection pool or borrowed it from the caller.
///
/// An owned pool shuts down when the transport handle is dropped; an external
/// pool is never torn down by the transport (the caller keeps its own handle).
#[derive(Debug, Clone)]
pub(crate) enum Pool<C> {
    /// Pool created by the transport at construction time.
    Owned(C),
    /// Caller-supplied pool, used exactly as given.
    External(C),
}

impl<C> Pool<C> {
    pub(crate) fn handle(&self) -> &C {
        match self {
            Self::Owned(client) | Self::External(client) => client,
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

/// Query-parameter builder that drops absent values.
///
/// Absent (`None`) parameters are never encoded: not as empty strings and
/// not as literal `"null"` values. Present values appear with their exact
/// `Display` rendering.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a required parameter.
    #[must_use]
    pub fn set(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Appends an optional parameter, dropping it when absent.
    #[must_use]
    pub fn maybe(mut self, key: &'static str, value: Option<impl Display>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Returns `true` when no parameters survived cleaning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Builds the classified error for a non-2xx response.
///
/// Classification is by status code only: 401 → authentication, 403 →
/// permission, 404 → not-found, 429 → rate-limit, 5xx → server, anything
/// else → generic. Message/body extraction is best-effort and never fails.
pub(crate) fn classify_failure(status: u16, body_bytes: &[u8]) -> Error {
    let (message, body) = extract_failure_details(status, body_bytes);
    let failure = ApiFailure {
        message,
        status,
        body,
    };
    match status {
        401 => Error::Authentication(failure),
        403 => Error::Permission(failure),
        404 => Error::NotFound(failure),
        429 => Error::RateLimit(failure),
        500..=599 => Error::Server(failure),
        _ => Error::Api(failure),
    }
}

/// Extracts a message and stored body from an error response.
///
/// A JSON object body yields its string `error` field, else its string
/// `message` field, else the status-code fallback. A non-JSON body is stored
/// as raw text with the fallback message. Empty bodies store nothing.
fn extract_failure_details(status: u16, body_bytes: &[u8]) -> (String, Option<ErrorBody>) {
    let fallback = format!("API request failed with status {status}");

    match serde_json::from_slice::<Value>(body_bytes) {
        Ok(json) => {
            let message = json
                .as_object()
                .and_then(|map| {
                    map.get("error")
                        .and_then(Value::as_str)
                        .or_else(|| map.get("message").and_then(Value::as_str))
                })
                .map_or(fallback, str::to_owned);
            (message, Some(ErrorBody::Json(json)))
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body_bytes);
            let body = if text.is_empty() {
                None
            } else {
                Some(ErrorBody::Text(text.into_owned()))
            };
            (fallback, body)
        }
    }
}

/// Decodes the body of a 2xx response.
///
/// HTTP 204 and empty bodies yield the no-content sentinel (`None`) without
/// attempting a JSON parse; anything else must be valid JSON and is returned
/// verbatim.
pub(crate) fn decode_success(status: u16, body_bytes: &[u8]) -> Result<Option<Value>> {
    if status == 204 || body_bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body_bytes)?))
}
