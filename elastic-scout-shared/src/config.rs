//! Query-method configuration.
//!
//! The process-wide [`QueryConfig`] selects which cluster query method (e.g.
//! `multi_match`, `match_phrase`) wraps the free-text portion of a search,
//! and carries the default parameters for each method. Entity types that
//! want custom behavior provide a [`SearchConfig`] override through their
//! `Searchable` implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Process-wide query method configuration.
///
/// Loaded once at startup and treated as immutable for the process lifetime.
/// `default` is the method used for entity types with no override; `methods`
/// maps each known method name to its default parameter object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// The method used when an entity type specifies none. Explicitly
    /// optional: resolution fails fast when this is `None` and no override
    /// is present.
    pub default: Option<String>,
    /// Default parameters per method name, merged into the text-match
    /// clause of the generated query.
    #[serde(default)]
    pub methods: BTreeMap<String, Map<String, Value>>,
}

impl Default for QueryConfig {
    /// A fuzzy `multi_match` over all fields. Matches what a fresh install
    /// ships with before a deployment-specific config file is provided.
    fn default() -> Self {
        let mut params = Map::new();
        params.insert("fields".to_string(), Value::Array(vec!["*".into()]));
        params.insert("fuzziness".to_string(), "AUTO".into());

        let mut methods = BTreeMap::new();
        methods.insert("multi_match".to_string(), params);

        Self {
            default: Some("multi_match".to_string()),
            methods,
        }
    }
}

impl QueryConfig {
    /// Look up the default parameters for a method name.
    pub fn params_for(&self, method: &str) -> Option<&Map<String, Value>> {
        self.methods.get(method)
    }
}

/// Per-entity-type query override.
///
/// Returned from `Searchable::search_config`. Either field may be set on
/// its own: a method-only override still pulls parameters from the
/// process-wide table, a params-only override keeps the default method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Override method name.
    pub method: Option<String>,
    /// Override parameters for the resolved method.
    pub params: Option<Map<String, Value>>,
}

impl SearchConfig {
    /// Override only the method name.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            method: Some(name.into()),
            params: None,
        }
    }

    /// Set override parameters.
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = QueryConfig::default();
        assert_eq!(config.default.as_deref(), Some("multi_match"));

        let params = config.params_for("multi_match").unwrap();
        assert_eq!(params["fuzziness"], json!("AUTO"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let config: QueryConfig = serde_json::from_value(json!({
            "default": "match_phrase",
            "methods": {
                "match_phrase": { "analyzer": "standard" },
                "multi_match": { "fields": ["title^2", "body"] }
            }
        }))
        .unwrap();

        assert_eq!(config.default.as_deref(), Some("match_phrase"));
        assert_eq!(
            config.params_for("match_phrase").unwrap()["analyzer"],
            json!("standard")
        );
        assert!(config.params_for("fuzzy").is_none());
    }

    #[test]
    fn test_deserialize_without_methods() {
        let config: QueryConfig = serde_json::from_value(json!({
            "default": "match_phrase"
        }))
        .unwrap();

        assert!(config.methods.is_empty());
    }
}
