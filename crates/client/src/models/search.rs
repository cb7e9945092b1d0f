//! Dashboard search filters and results.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Filters for the dashboard search endpoint. Empty filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSearchOptions {
    /// Case-insensitive title substring.
    pub query: Option<String>,
    /// Hits must carry every tag listed.
    pub tags: Vec<String>,
    pub starred: bool,
    pub limit: Option<u32>,
}

impl DashboardSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn starred_only(mut self) -> Self {
        self.starred = true;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters for `GET /api/search`; `tag` repeats once per tag.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            params.push(("query".to_string(), query.to_string()));
        }
        for tag in &self.tags {
            params.push(("tag".to_string(), tag.clone()));
        }
        if self.starred {
            params.push(("starred".to_string(), "true".to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// One result of a dashboard search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardHit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// e.g. `db/production-overview`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "isStarred", default, deserialize_with = "null_as_default")]
    pub is_starred: bool,
}

impl DashboardHit {
    /// The slug part of `uri`.
    pub fn slug(&self) -> &str {
        self.uri.strip_prefix("db/").unwrap_or(self.uri.as_str())
    }
}
