//! Async resource façades, one per API resource group.
//!
//! Each method builds exactly one query-parameter set from its arguments
//! (absent values dropped) and delegates to the shared [`Transport`]; the
//! decoded JSON response is returned unmodified. Responses are untyped
//! [`Value`] pass-throughs; the field names mentioned in the docs describe
//! the API's response shapes, they are not enforced schemas.

use std::fmt::Display;

use serde_json::Value;

use super::Transport;
use crate::error::Result;
use crate::filters::{ArticleFilter, EntityFilter, Page, StoryFilter};
use crate::http::Query;

/// Articles API: list, get, and fetch full content for news articles.
#[derive(Debug, Clone, Copy)]
pub struct Articles<'a> {
    transport: &'a Transport,
}

impl<'a> Articles<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists articles with optional filtering and pagination.
    ///
    /// Returns a paginated listing: `items` (array of articles with `id`,
    /// `url_hash`, `slug`, `title`, `source_name`, `published_at`,
    /// `category`, ...), `total`, `limit`, `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn list(&self, filter: &ArticleFilter) -> Result<Option<Value>> {
        self.transport.get("/items", &filter.query()).await
    }

    /// Gets a single article by URL hash or slug.
    ///
    /// The API expects at least one of `url_hash` / `slug`; the client does
    /// not validate this; with both absent the request is sent without
    /// either parameter and the API decides.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn get(
        &self,
        url_hash: Option<&str>,
        slug: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = Query::new().maybe("url_hash", url_hash).maybe("slug", slug);
        self.transport.get("/item", &query).await
    }

    /// Gets the full extracted content for an article, optionally truncated
    /// to `max_chars` characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn content(&self, url_hash: &str, max_chars: Option<u32>) -> Result<Option<Value>> {
        let query = Query::new()
            .set("url_hash", url_hash)
            .maybe("max_chars", max_chars);
        self.transport.get("/content", &query).await
    }
}

/// Stories API: list, get, and track developments for clustered stories.
#[derive(Debug, Clone, Copy)]
pub struct Stories<'a> {
    transport: &'a Transport,
}

impl<'a> Stories<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists stories with optional filtering and pagination.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn list(&self, filter: &StoryFilter) -> Result<Option<Value>> {
        self.transport.get("/stories", &filter.query()).await
    }

    /// Lists stories ranked by importance.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn ranked(&self, limit: Option<u32>) -> Result<Option<Value>> {
        let query = Query::new().maybe("limit", limit);
        self.transport.get("/stories/ranked", &query).await
    }

    /// Gets a single story by numeric ID or slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn get(&self, id: impl Display) -> Result<Option<Value>> {
        self.transport
            .get(&format!("/stories/{id}"), &Query::new())
            .await
    }

    /// Lists the timeline developments for a story.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn developments(&self, id: impl Display) -> Result<Option<Value>> {
        self.transport
            .get(&format!("/stories/{id}/developments"), &Query::new())
            .await
    }

    /// Gets updates to a story since `since_ms` (Unix milliseconds).
    ///
    /// Returns `new_articles`, `new_developments`, and `updated_summary`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn updates(&self, id: impl Display, since_ms: i64) -> Result<Option<Value>> {
        let query = Query::new().set("since_ms", since_ms);
        self.transport
            .get(&format!("/stories/{id}/updates"), &query)
            .await
    }
}

/// Search API: keyword search, full-text search, and suggestions.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    transport: &'a Transport,
}

impl<'a> Search<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Searches articles by keyword.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn articles(&self, q: &str, page: Page) -> Result<Option<Value>> {
        let query = page.query_onto(Query::new().set("q", q));
        self.transport.get("/search", &query).await
    }

    /// Full-text search across articles and stories.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn full(&self, q: &str, page: Page) -> Result<Option<Value>> {
        let query = page.query_onto(Query::new().set("q", q));
        self.transport.get("/search/full", &query).await
    }

    /// Gets search suggestions / autocomplete for a partial query.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn suggest(&self, q: &str, limit: Option<u32>) -> Result<Option<Value>> {
        let query = Query::new().set("q", q).maybe("limit", limit);
        self.transport.get("/search/suggest", &query).await
    }
}

/// Entities API: named entities, trending, politicians, and their articles.
#[derive(Debug, Clone, Copy)]
pub struct Entities<'a> {
    transport: &'a Transport,
}

impl<'a> Entities<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists entities with optional filtering.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn list(&self, filter: &EntityFilter) -> Result<Option<Value>> {
        self.transport.get("/entities", &filter.query()).await
    }

    /// Lists currently trending entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn trending(&self, limit: Option<u32>) -> Result<Option<Value>> {
        let query = Query::new().maybe("limit", limit);
        self.transport.get("/entities/trending", &query).await
    }

    /// Lists politician entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn politicians(&self, page: Page) -> Result<Option<Value>> {
        let query = page.query_onto(Query::new());
        self.transport.get("/entities/politicians", &query).await
    }

    /// Gets a single entity by numeric ID or slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn get(&self, id: impl Display) -> Result<Option<Value>> {
        self.transport
            .get(&format!("/entities/{id}"), &Query::new())
            .await
    }

    /// Lists articles associated with an entity.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn articles(&self, id: impl Display, page: Page) -> Result<Option<Value>> {
        let query = page.query_onto(Query::new());
        self.transport
            .get(&format!("/entities/{id}/articles"), &query)
            .await
    }
}

/// Sources API: news sources, categories, tags, and source rankings.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    transport: &'a Transport,
}

impl<'a> Sources<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists all news sources.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn list(&self) -> Result<Option<Value>> {
        self.transport.get("/sources", &Query::new()).await
    }

    /// Lists all news categories.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn categories(&self) -> Result<Option<Value>> {
        self.transport.get("/categories", &Query::new()).await
    }

    /// Lists all content tags.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn tags(&self) -> Result<Option<Value>> {
        self.transport.get("/tags", &Query::new()).await
    }

    /// Lists source rankings.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn rankings(&self) -> Result<Option<Value>> {
        self.transport.get("/source-rankings", &Query::new()).await
    }
}

/// Graph API: entity networks, story-entity graphs, and topic clusters.
///
/// Every graph response is a `nodes` / `edges` pair.
#[derive(Debug, Clone, Copy)]
pub struct Graph<'a> {
    transport: &'a Transport,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Gets the co-occurrence network around an entity, up to `depth` hops
    /// and `limit` connected entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn entity_network(
        &self,
        entity_id: i64,
        depth: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<Value>> {
        let query = Query::new()
            .set("entity_id", entity_id)
            .maybe("depth", depth)
            .maybe("limit", limit);
        self.transport.get("/graph/entity-network", &query).await
    }

    /// Gets the entity graph for a story.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn story_entity(
        &self,
        story_id: i64,
        limit: Option<u32>,
    ) -> Result<Option<Value>> {
        let query = Query::new()
            .set("story_id", story_id)
            .maybe("limit", limit);
        self.transport.get("/graph/story-entity", &query).await
    }

    /// Gets the topic cluster graph, optionally centered on `topic_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn topic_cluster(
        &self,
        topic_id: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Option<Value>> {
        let query = Query::new()
            .maybe("topic_id", topic_id)
            .maybe("limit", limit);
        self.transport.get("/graph/topic-cluster", &query).await
    }
}

/// Meta API: related articles, platform stats, version, and usage.
#[derive(Debug, Clone, Copy)]
pub struct Meta<'a> {
    transport: &'a Transport,
}

impl<'a> Meta<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lists articles related to the given article.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn related(&self, url_hash: &str, limit: Option<u32>) -> Result<Option<Value>> {
        let query = Query::new()
            .set("url_hash", url_hash)
            .maybe("limit", limit);
        self.transport.get("/related", &query).await
    }

    /// Gets platform-wide statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn stats(&self) -> Result<Option<Value>> {
        self.transport.get("/stats", &Query::new()).await
    }

    /// Gets API version information.
    ///
    /// This is the one endpoint that requires no authentication; no
    /// `Authorization` header is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn version(&self) -> Result<Option<Value>> {
        self.transport.get_public("/version", &Query::new()).await
    }

    /// Gets API usage statistics for the account, optionally bounded to a
    /// `[from_ms, to_ms]` window (Unix milliseconds).
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on a non-success response or a
    /// connection fault.
    pub async fn usage(
        &self,
        from_ms: Option<i64>,
        to_ms: Option<i64>,
    ) -> Result<Option<Value>> {
        let query = Query::new()
            .maybe("from_ms", from_ms)
            .maybe("to_ms", to_ms);
        self.transport.get("/usage", &query).await
    }
}
