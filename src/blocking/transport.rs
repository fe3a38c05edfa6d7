//! Blocking HTTP transport for the NewsRank API.
//!
//! Behaviorally identical to the async [`crate::Transport`]: same URL
//! building, query cleaning, auth, classification, and no-content rules,
//! except that every call runs to completion on the calling thread.

use std::fmt;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::http::{self, Pool, Query};

/// Low-level blocking transport.
///
/// Exposed through [`Client::transport`](super::Client::transport) as an
/// escape hatch for endpoints not yet covered by a façade.
pub struct Transport {
    api_key: String,
    base_url: String,
    pool: Pool<reqwest::blocking::Client>,
}

impl Transport {
    /// Creates a transport from the client configuration.
    ///
    /// See [`crate::Transport`] for the identical rules; the pool type is
    /// `reqwest::blocking::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`](crate::Error::InvalidBaseUrl) when
    /// the base-URL override does not parse, or
    /// [`Error::Transport`](crate::Error::Transport) when pool construction
    /// fails.
    pub(crate) fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
        http_client: Option<reqwest::blocking::Client>,
    ) -> Result<Self> {
        let base_url = match base_url {
            Some(raw) => {
                Url::parse(&raw)?;
                http::normalize_base_url(&raw)
            }
            None => http::DEFAULT_BASE_URL.to_string(),
        };

        let pool = match http_client {
            Some(client) => Pool::External(client),
            None => Pool::Owned(build_pool(timeout)?),
        };

        Ok(Self {
            api_key,
            base_url,
            pool,
        })
    }

    /// Sends one HTTP request and returns the decoded JSON body.
    ///
    /// Same contract as [`crate::Transport::request`]; the call completes
    /// on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns a status-classified [`Error`](crate::Error) for non-2xx
    /// responses, [`Error::Transport`](crate::Error::Transport) for
    /// connection-level faults, and
    /// [`Error::Decode`](crate::Error::Decode) when a success body is not
    /// valid JSON.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        auth: bool,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.pool.handle().request(method, &url);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if auth {
            request = request.bearer_auth(&self.api_key);
        }

        debug!(%url, "sending API request");
        let response = request.send()?;
        let status = response.status();
        let body = response.bytes()?;

        if !status.is_success() {
            debug!(status = status.as_u16(), %url, "API request failed");
            return Err(http::classify_failure(status.as_u16(), &body));
        }
        http::decode_success(status.as_u16(), &body)
    }

    /// Authenticated `GET` convenience wrapper.
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub fn get(&self, path: &str, query: &Query) -> Result<Option<Value>> {
        self.request(Method::GET, path, query, true)
    }

    /// Unauthenticated `GET` (only the version-info endpoint).
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub fn get_public(&self, path: &str, query: &Query) -> Result<Option<Value>> {
        self.request(Method::GET, path, query, false)
    }

    /// The effective base URL (trailing slashes stripped).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` when the transport owns its connection pool.
    #[must_use]
    pub fn owns_pool(&self) -> bool {
        self.pool.is_owned()
    }

    /// Releases the transport.
    ///
    /// An owned connection pool shuts down with this handle; a
    /// caller-supplied pool is left untouched and remains usable by its
    /// owner.
    pub fn close(self) {}
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("owns_pool", &self.pool.is_owned())
            .finish_non_exhaustive()
    }
}

fn build_pool(timeout: Duration) -> Result<reqwest::blocking::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(http::USER_AGENT)
        .default_headers(headers)
        .build()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let transport = Transport::new(
            "nrf_test".to_string(),
            Some("https://staging.newsrank.ai/api/v1///".to_string()),
            http::DEFAULT_TIMEOUT,
            None,
        )
        .unwrap();
        assert_eq!(transport.base_url(), "https://staging.newsrank.ai/api/v1");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = Transport::new(
            "nrf_test".to_string(),
            Some("not a url".to_string()),
            http::DEFAULT_TIMEOUT,
            None,
        );
        assert!(matches!(result, Err(crate::Error::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_pool_ownership_reported() {
        let owned = Transport::new(
            "nrf_test".to_string(),
            None,
            http::DEFAULT_TIMEOUT,
            None,
        )
        .unwrap();
        assert!(owned.owns_pool());

        let external = Transport::new(
            "nrf_test".to_string(),
            None,
            http::DEFAULT_TIMEOUT,
            Some(reqwest::blocking::Client::new()),
        )
        .unwrap();
        assert!(!external.owns_pool());
    }
}
