//! Async HTTP transport for the NewsRank API.

use std::fmt;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::http::{self, Pool, Query};

/// Low-level async transport: builds URLs, attaches auth, performs one HTTP
/// call per request, and classifies failures.
///
/// Resource façades delegate all HTTP work here. The transport is exposed
/// through [`Client::transport`](crate::Client::transport) as an escape
/// hatch for endpoints not yet covered by a façade.
pub struct Transport {
    api_key: String,
    base_url: String,
    pool: Pool<reqwest::Client>,
}

impl Transport {
    /// Creates a transport from the client configuration.
    ///
    /// When `http_client` is `None` a connection pool is built with the
    /// fixed `User-Agent`, `Accept: application/json`, and `timeout`; a
    /// caller-supplied pool is used exactly as given (its configuration,
    /// including timeout and headers, stays the caller's responsibility)
    /// and is never closed by the transport.
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
        http_client: Option<reqwest::Client>,
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
    /// Absent query parameters are never sent; `auth` controls whether the
    /// `Authorization: Bearer` header is attached. A 2xx response with
    /// status 204 or an empty body yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a status-classified [`Error`](crate::Error) for non-2xx
    /// responses, [`Error::Transport`](crate::Error::Transport) for
    /// connection-level faults, and
    /// [`Error::Decode`](crate::Error::Decode) when a success body is not
    /// valid JSON.
    pub async fn request(
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
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

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
    pub async fn get(&self, path: &str, query: &Query) -> Result<Option<Value>> {
        self.request(Method::GET, path, query, true).await
    }

    /// Unauthenticated `GET` (only the version-info endpoint).
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub async fn get_public(&self, path: &str, query: &Query) -> Result<Option<Value>> {
        self.request(Method::GET, path, query, false).await
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

fn build_pool(timeout: Duration) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(http::USER_AGENT)
        .default_headers(headers)
        .build()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn transport(base_url: Option<&str>) -> Transport {
        Transport::new(
            "nrf_test".to_string(),
            base_url.map(str::to_string),
            http::DEFAULT_TIMEOUT,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(transport(None).base_url(), "https://newsrank.ai/api/v1");
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let transport = transport(Some("https://staging.newsrank.ai/api/v1/"));
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
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_pool_ownership_reported() {
        assert!(transport(None).owns_pool());

        let external = Transport::new(
            "nrf_test".to_string(),
            None,
            http::DEFAULT_TIMEOUT,
            Some(reqwest::Client::new()),
        )
        .unwrap();
        assert!(!external.owns_pool());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", transport(None));
        assert!(!rendered.contains("nrf_test"), "got: {rendered}");
        assert!(rendered.contains("newsrank.ai"), "got: {rendered}");
    }
}
