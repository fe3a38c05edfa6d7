//! Async client for the NewsRank API.

mod resources;
mod transport;

use std::fmt;
use std::time::Duration;

pub use resources::{Articles, Entities, Graph, Meta, Search, Sources, Stories};
pub use transport::Transport;

use crate::error::Result;
use crate::http;

/// Asynchronous NewsRank API client.
///
/// Owns one [`Transport`] and exposes one accessor per resource group.
/// Operations suspend at the network-await point; nothing blocks the
/// executor thread for the duration of a round trip.
///
/// ```no_run
/// use newsrank::Client;
///
/// # async fn example() -> newsrank::Result<()> {
/// let nr = Client::new("nrf_your_api_key");
/// let stories = nr.stories().ranked(Some(5)).await?;
/// nr.close();
/// # Ok(())
/// # }
/// ```
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Creates a client with the default base URL and timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP connection pool fails to build with the static
    /// default configuration (e.g. TLS backend initialization failure).
    /// Use [`Client::builder`] to handle construction errors.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key)
            .build()
            .expect("failed to build HTTP client with static configuration")
    }

    /// Starts building a client with a custom configuration.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            base_url: None,
            timeout: http::DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Access the articles API.
    #[must_use]
    pub fn articles(&self) -> Articles<'_> {
        Articles::new(&self.transport)
    }

    /// Access the stories API.
    #[must_use]
    pub fn stories(&self) -> Stories<'_> {
        Stories::new(&self.transport)
    }

    /// Access the search API.
    #[must_use]
    pub fn search(&self) -> Search<'_> {
        Search::new(&self.transport)
    }

    /// Access the entities API.
    #[must_use]
    pub fn entities(&self) -> Entities<'_> {
        Entities::new(&self.transport)
    }

    /// Access the sources API.
    #[must_use]
    pub fn sources(&self) -> Sources<'_> {
        Sources::new(&self.transport)
    }

    /// Access the graph API.
    #[must_use]
    pub fn graph(&self) -> Graph<'_> {
        Graph::new(&self.transport)
    }

    /// Access the meta/utility API.
    #[must_use]
    pub fn meta(&self) -> Meta<'_> {
        Meta::new(&self.transport)
    }

    /// The low-level transport, for endpoints not covered by a façade.
    #[must_use]
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Closes the client.
    ///
    /// An owned connection pool shuts down here exactly once; a
    /// caller-supplied pool is left untouched. Dropping the client has the
    /// same effect, so scoped use needs no explicit call.
    pub fn close(self) {
        self.transport.close();
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.transport.base_url())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Overrides the default API base URL; trailing slashes are stripped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout for an owned connection pool
    /// (default: 30 seconds). Ignored when [`http_client`](Self::http_client)
    /// supplies the pool.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supplies an existing `reqwest` client to route requests through.
    ///
    /// The caller stays responsible for the pool's configuration and
    /// lifetime; [`Client::close`] will not shut it down.
    #[must_use]
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`](crate::Error::InvalidBaseUrl) when
    /// the base-URL override does not parse, or
    /// [`Error::Transport`](crate::Error::Transport) when pool construction
    /// fails.
    pub fn build(self) -> Result<Client> {
        let transport = Transport::new(
            self.api_key,
            self.base_url,
            self.timeout,
            self.http_client,
        )?;
        Ok(Client { transport })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_base_url_override() {
        let client = Client::builder("nrf_test")
            .base_url("https://staging.newsrank.ai/api/v1/")
            .build()
            .unwrap();
        assert_eq!(
            client.transport().base_url(),
            "https://staging.newsrank.ai/api/v1"
        );
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = Client::builder("nrf_test").base_url("::::").build();
        assert!(matches!(result, Err(crate::Error::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_external_http_client_not_owned() {
        let client = Client::builder("nrf_test")
            .http_client(reqwest::Client::new())
            .build()
            .unwrap();
        assert!(!client.transport().owns_pool());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = Client::new("nrf_secret");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("nrf_secret"), "got: {rendered}");
    }
}
