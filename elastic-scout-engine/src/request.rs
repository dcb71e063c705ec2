//! Backend-agnostic search request.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::interfaces::QueryOverride;
use elastic_scout_shared::{FilterValue, SortDirection, SortSpec};

/// A backend-agnostic search request.
///
/// Constructed per call and discarded after use. Filters are kept in
/// declaration order because that order is preserved into the generated
/// query document; sorts are appended after the default relevance sort.
#[derive(Clone)]
pub struct SearchRequest {
    /// Free-text query string.
    pub query: String,
    /// Equality/set filters in declaration order.
    pub filters: Vec<(String, FilterValue)>,
    /// Caller-supplied sort specs.
    pub sorts: Vec<SortSpec>,
    /// Simple result size limit. Maps to `size` only; use
    /// `SearchEngine::paginate` for offset pagination.
    pub limit: Option<u64>,
    /// Override callback that bypasses submission entirely.
    pub callback: Option<Arc<dyn QueryOverride>>,
}

impl SearchRequest {
    /// Create a request for the given free-text query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
            sorts: Vec::new(),
            limit: None,
            callback: None,
        }
    }

    /// Add a filter. JSON arrays compile to set-membership clauses, any
    /// other value to an exact-match clause.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters
            .push((field.into(), FilterValue::from(value.into())));
        self
    }

    /// Add a sort spec, appended after any previously declared sorts.
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sorts.push(SortSpec::new(field, direction));
        self
    }

    /// Set a simple result size limit.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Attach an override callback.
    pub fn with_callback(mut self, callback: Arc<dyn QueryOverride>) -> Self {
        self.callback = Some(callback);
        self
    }
}

impl fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequest")
            .field("query", &self.query)
            .field("filters", &self.filters)
            .field("sorts", &self.sorts)
            .field("limit", &self.limit)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filters_preserve_declaration_order() {
        let request = SearchRequest::new("laptop")
            .filter("status", json!("active"))
            .filter("tags", json!(["a", "b"]))
            .filter("brand", json!("acme"));

        let fields: Vec<&str> = request
            .filters
            .iter()
            .map(|(field, _)| field.as_str())
            .collect();
        assert_eq!(fields, vec!["status", "tags", "brand"]);
    }

    #[test]
    fn test_array_filter_becomes_set_valued() {
        let request = SearchRequest::new("laptop").filter("tags", json!(["a", "b"]));

        assert_eq!(
            request.filters[0].1,
            FilterValue::Many(vec![json!("a"), json!("b")])
        );
    }

    #[test]
    fn test_debug_hides_callback_body() {
        let request = SearchRequest::new("laptop");
        let output = format!("{:?}", request);
        assert!(output.contains("callback: false"));
    }
}
