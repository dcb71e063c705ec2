//! Typed views over raw search responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One matched document in cluster-provided rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The document identifier (`_id`).
    pub id: String,
    /// Backend-computed relevance score, when tracked.
    pub score: Option<f64>,
    /// The raw per-hit payload, retained for downstream mapping.
    pub source: Value,
}

/// A parsed search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total hit count reported by the cluster. Zero is a valid terminal
    /// state, never an error.
    pub total: u64,
    /// Hits in cluster-provided rank order.
    pub hits: Vec<SearchHit>,
    /// The raw response, retained for callers that need fields the typed
    /// view does not carry.
    pub raw: Value,
}

impl SearchResult {
    /// Identifiers of the hits in rank order.
    pub fn identifiers(&self) -> Vec<String> {
        self.hits.iter().map(|hit| hit.id.clone()).collect()
    }
}

/// A [`SearchResult`] for one page of results plus the computed page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult {
    /// The page's search result.
    pub result: SearchResult,
    /// `floor(total / page_size)`.
    pub page_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifiers_preserve_order() {
        let result = SearchResult {
            total: 3,
            hits: vec![
                SearchHit {
                    id: "b".to_string(),
                    score: Some(2.0),
                    source: json!({}),
                },
                SearchHit {
                    id: "a".to_string(),
                    score: Some(1.5),
                    source: json!({}),
                },
                SearchHit {
                    id: "c".to_string(),
                    score: None,
                    source: json!({}),
                },
            ],
            raw: json!({}),
        };

        assert_eq!(result.identifiers(), vec!["b", "a", "c"]);
    }
}
