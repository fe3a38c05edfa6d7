//! Filter and pagination parameters shared by both client flavors.
//!
//! Each struct maps its present fields onto one query-parameter set; absent
//! fields are dropped entirely (see [`Query`]). Because the mapping lives
//! here, the async and blocking façades stay in lockstep on parameter names.

use crate::http::Query;

/// Filters for listing articles (`/items`).
///
/// All fields are independently optional; the default value selects the
/// API's own defaults.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Maximum number of articles to return.
    pub limit: Option<u32>,
    /// Number of articles to skip.
    pub offset: Option<u32>,
    /// Filter by category slug.
    pub category: Option<String>,
    /// Filter by keyword.
    pub keyword: Option<String>,
    /// Filter by source domain.
    pub source: Option<String>,
    /// Filter by content extraction status.
    pub content_status: Option<String>,
    /// Only articles published after this date (ISO 8601).
    pub date_from: Option<String>,
    /// Only articles published before this date (ISO 8601).
    pub date_to: Option<String>,
    /// Field to sort by (e.g. `published_at`).
    pub sort_by: Option<String>,
    /// Sort direction: `asc` or `desc`.
    pub sort_order: Option<String>,
}

impl ArticleFilter {
    pub(crate) fn query(&self) -> Query {
        Query::new()
            .maybe("limit", self.limit)
            .maybe("offset", self.offset)
            .maybe("category", self.category.as_deref())
            .maybe("keyword", self.keyword.as_deref())
            .maybe("source", self.source.as_deref())
            .maybe("content_status", self.content_status.as_deref())
            .maybe("date_from", self.date_from.as_deref())
            .maybe("date_to", self.date_to.as_deref())
            .maybe("sort_by", self.sort_by.as_deref())
            .maybe("sort_order", self.sort_order.as_deref())
    }
}

/// Filters for listing stories (`/stories`).
#[derive(Debug, Clone, Default)]
pub struct StoryFilter {
    /// Maximum number of stories to return.
    pub limit: Option<u32>,
    /// Number of stories to skip.
    pub offset: Option<u32>,
    /// Filter by category slug.
    pub category: Option<String>,
}

impl StoryFilter {
    pub(crate) fn query(&self) -> Query {
        Query::new()
            .maybe("limit", self.limit)
            .maybe("offset", self.offset)
            .maybe("category", self.category.as_deref())
    }
}

/// Filters for listing entities (`/entities`).
#[derive(Debug, Clone, Default)]
pub struct EntityFilter {
    /// Search query to filter entities by name.
    pub q: Option<String>,
    /// Entity type (`person`, `organization`, `location`); sent as the
    /// `type` parameter.
    pub kind: Option<String>,
    /// Entity subcategory filter.
    pub subcategory: Option<String>,
    /// Maximum number of entities to return.
    pub limit: Option<u32>,
    /// Number of entities to skip.
    pub offset: Option<u32>,
}

impl EntityFilter {
    pub(crate) fn query(&self) -> Query {
        Query::new()
            .maybe("q", self.q.as_deref())
            .maybe("type", self.kind.as_deref())
            .maybe("subcategory", self.subcategory.as_deref())
            .maybe("limit", self.limit)
            .maybe("offset", self.offset)
    }
}

/// Plain limit/offset pagination, used by search and entity sub-listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Page {
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl Page {
    pub(crate) fn query_onto(self, query: Query) -> Query {
        query.maybe("limit", self.limit).maybe("offset", self.offset)
    }
}
