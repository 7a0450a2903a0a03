//! List query construction.
//!
//! The backend accepts filter predicates as JSON-encoded `queries[]`
//! parameters. This module builds them explicitly, including pagination;
//! nothing inherits the remote SDK's silent defaults.

use serde_json::json;

use super::types::PostStatus;

/// Documents per page when no limit is given; matches the backend default.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// A single filter predicate in the backend's query encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Predicate method, e.g. `equal`.
    pub method: String,
    /// Document attribute the predicate applies to.
    pub attribute: String,
    /// Values compared against the attribute.
    pub values: Vec<serde_json::Value>,
}

impl Filter {
    /// Matches documents whose attribute equals the given value.
    pub fn equal(attribute: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            method: "equal".to_string(),
            attribute: attribute.into(),
            values: vec![value.into()],
        }
    }

    /// Encodes the predicate as the backend's JSON query string.
    #[must_use]
    pub fn encode(&self) -> String {
        json!({
            "method": self.method,
            "attribute": self.attribute,
            "values": self.values,
        })
        .to_string()
    }
}

/// Filter predicates plus explicit pagination for a list call.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Predicates, combined with AND by the backend.
    pub filters: Vec<Filter>,
    /// Maximum documents to return.
    pub limit: u32,
    /// Documents to skip from the start of the result set.
    pub offset: u32,
}

impl Default for ListQuery {
    /// The blog's default listing: published posts, first page.
    fn default() -> Self {
        Self {
            filters: vec![Filter::equal("status", PostStatus::Active.as_str())],
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl ListQuery {
    /// A query with no filter predicates.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self {
            filters: Vec::new(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }

    /// Adds a filter predicate.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the number of documents to skip.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Encodes all predicates plus pagination as `queries[]` values.
    #[must_use]
    pub fn encode(&self) -> Vec<String> {
        let mut queries: Vec<String> = self.filters.iter().map(Filter::encode).collect();
        queries.push(json!({ "method": "limit", "values": [self.limit] }).to_string());
        queries.push(json!({ "method": "offset", "values": [self.offset] }).to_string());
        queries
    }
}
