//! Query document builders.
//!
//! This module turns a [`SearchRequest`] plus the resolved query method into
//! the cluster's native query document: a boolean query whose `must` clause
//! wraps the free text in the configured match method, an optional `filter`
//! clause list, a sort list led by relevance, and optional paging fields.

use serde_json::{json, Map, Value};

use crate::errors::EngineError;
use crate::request::SearchRequest;
use elastic_scout_shared::{FilterValue, QueryConfig, SearchConfig, SortSpec};

/// The query method a search will use after default/override resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMethod {
    /// Method name, e.g. `multi_match` or `match_phrase`.
    pub name: String,
    /// Parameters merged into the text-match clause.
    pub params: Map<String, Value>,
}

/// Offset/size options for one search execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub from: Option<u64>,
    pub size: Option<u64>,
}

impl SearchOptions {
    /// Options for a simple limited search: size only, no offset.
    pub fn limit(limit: Option<u64>) -> Self {
        Self {
            from: None,
            size: limit,
        }
    }

    /// Options for one page: `from = page * page_size - page_size`,
    /// saturating at zero, and `size = page_size`.
    pub fn page(page: u64, page_size: u64) -> Self {
        Self {
            from: Some(page.saturating_mul(page_size).saturating_sub(page_size)),
            size: Some(page_size),
        }
    }
}

/// Resolve the query method for an entity type.
///
/// The per-type override takes precedence for both the method name and its
/// parameters; either falls back independently to the process-wide config.
/// Fails fast with `ConfigurationMissing` rather than defaulting to an
/// empty method.
pub fn resolve_method(
    config: &QueryConfig,
    overrides: Option<&SearchConfig>,
) -> Result<ResolvedMethod, EngineError> {
    let name = overrides
        .and_then(|c| c.method.clone())
        .or_else(|| config.default.clone())
        .ok_or_else(|| {
            EngineError::configuration_missing(
                "no query method override and no process-wide default",
            )
        })?;

    let params = match overrides.and_then(|c| c.params.clone()) {
        Some(params) => params,
        None => config.params_for(&name).cloned().ok_or_else(|| {
            EngineError::configuration_missing(format!(
                "no parameters configured for query method `{}`",
                name
            ))
        })?,
    };

    Ok(ResolvedMethod { name, params })
}

/// Build the query document for a request.
pub fn build_search_document(
    request: &SearchRequest,
    method: &ResolvedMethod,
    options: &SearchOptions,
) -> Value {
    // The text-match clause: the query string first, then the method
    // parameters merged over it.
    let mut text_match = Map::new();
    text_match.insert("query".to_string(), Value::String(request.query.clone()));
    for (key, value) in &method.params {
        text_match.insert(key.clone(), value.clone());
    }

    let mut match_clause = Map::new();
    match_clause.insert(method.name.clone(), Value::Object(text_match));

    let mut bool_body = Map::new();
    bool_body.insert(
        "must".to_string(),
        Value::Array(vec![Value::Object(match_clause)]),
    );

    let filters = compile_filters(&request.filters);
    if !filters.is_empty() {
        bool_body.insert("filter".to_string(), Value::Array(filters));
    }

    let mut body = Map::new();
    body.insert("query".to_string(), json!({ "bool": bool_body }));
    body.insert(
        "sort".to_string(),
        Value::Array(compile_sorts(&request.sorts)),
    );
    body.insert("track_scores".to_string(), Value::Bool(true));

    if let Some(from) = options.from {
        body.insert("from".to_string(), json!(from));
    }
    if let Some(size) = options.size {
        body.insert("size".to_string(), json!(size));
    }

    Value::Object(body)
}

/// Compile filter clauses in declaration order.
///
/// Set-valued filters become `terms` clauses, scalar filters `term` clauses.
fn compile_filters(filters: &[(String, FilterValue)]) -> Vec<Value> {
    filters
        .iter()
        .map(|(field, value)| match value {
            FilterValue::Many(values) => {
                keyed_clause("terms", field, Value::Array(values.clone()))
            }
            FilterValue::One(value) => keyed_clause("term", field, value.clone()),
        })
        .collect()
}

/// Compile the sort list: relevance-descending first, caller sorts after.
fn compile_sorts(sorts: &[SortSpec]) -> Vec<Value> {
    let mut clauses = vec![json!({ "_score": { "order": "desc" } })];
    for spec in sorts {
        let mut order = Map::new();
        order.insert("order".to_string(), spec.direction.as_str().into());
        let mut clause = Map::new();
        clause.insert(spec.field.clone(), Value::Object(order));
        clauses.push(Value::Object(clause));
    }
    clauses
}

fn keyed_clause(kind: &str, field: &str, value: Value) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), value);
    let mut clause = Map::new();
    clause.insert(kind.to_string(), Value::Object(inner));
    Value::Object(clause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elastic_scout_shared::SortDirection;
    use serde_json::json;

    fn test_config() -> QueryConfig {
        serde_json::from_value(json!({
            "default": "multi_match",
            "methods": {
                "multi_match": { "fields": ["name", "description"], "fuzziness": "AUTO" },
                "match_phrase": { "analyzer": "standard" }
            }
        }))
        .unwrap()
    }

    fn resolved() -> ResolvedMethod {
        resolve_method(&test_config(), None).unwrap()
    }

    #[test]
    fn test_resolve_method_uses_default() {
        let method = resolve_method(&test_config(), None).unwrap();

        assert_eq!(method.name, "multi_match");
        assert_eq!(method.params["fuzziness"], json!("AUTO"));
    }

    #[test]
    fn test_resolve_method_override_wins() {
        let mut params = Map::new();
        params.insert("boost".to_string(), json!(2.0));
        let overrides = SearchConfig::method("match_phrase").with_params(params);

        let method = resolve_method(&test_config(), Some(&overrides)).unwrap();

        assert_eq!(method.name, "match_phrase");
        assert_eq!(method.params["boost"], json!(2.0));
        assert!(method.params.get("analyzer").is_none());
    }

    #[test]
    fn test_resolve_method_override_method_pulls_config_params() {
        let overrides = SearchConfig::method("match_phrase");

        let method = resolve_method(&test_config(), Some(&overrides)).unwrap();

        assert_eq!(method.name, "match_phrase");
        assert_eq!(method.params["analyzer"], json!("standard"));
    }

    #[test]
    fn test_resolve_method_unknown_method_fails() {
        let overrides = SearchConfig::method("fuzzy");

        let result = resolve_method(&test_config(), Some(&overrides));

        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigurationMissing(_)
        ));
    }

    #[test]
    fn test_resolve_method_no_default_fails() {
        let config: QueryConfig = serde_json::from_value(json!({ "default": null })).unwrap();

        let result = resolve_method(&config, None);

        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigurationMissing(_)
        ));
    }

    #[test]
    fn test_document_shape() {
        let request = SearchRequest::new("laptop");
        let document =
            build_search_document(&request, &resolved(), &SearchOptions::limit(Some(5)));

        let must = document["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 1);
        assert_eq!(must[0]["multi_match"]["query"], json!("laptop"));
        assert_eq!(must[0]["multi_match"]["fuzziness"], json!("AUTO"));
        assert_eq!(document["track_scores"], json!(true));
        assert_eq!(document["size"], json!(5));
        assert!(document.get("from").is_none());
    }

    #[test]
    fn test_scalar_filter_compiles_to_term() {
        let request = SearchRequest::new("laptop").filter("status", json!("active"));
        let document = build_search_document(&request, &resolved(), &SearchOptions::default());

        let filter = document["query"]["bool"]["filter"].as_array().unwrap();
        assert_eq!(filter[0], json!({ "term": { "status": "active" } }));
    }

    #[test]
    fn test_set_filter_compiles_to_terms() {
        let request = SearchRequest::new("laptop").filter("tags", json!(["a", "b"]));
        let document = build_search_document(&request, &resolved(), &SearchOptions::default());

        let filter = document["query"]["bool"]["filter"].as_array().unwrap();
        assert_eq!(filter[0], json!({ "terms": { "tags": ["a", "b"] } }));
    }

    #[test]
    fn test_filters_emitted_in_declaration_order() {
        let request = SearchRequest::new("laptop")
            .filter("status", json!("active"))
            .filter("tags", json!(["a", "b"]))
            .filter("brand", json!("acme"));
        let document = build_search_document(&request, &resolved(), &SearchOptions::default());

        let filter = document["query"]["bool"]["filter"].as_array().unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter[0]["term"]["status"].is_string());
        assert!(filter[1]["terms"]["tags"].is_array());
        assert!(filter[2]["term"]["brand"].is_string());
    }

    #[test]
    fn test_no_filters_omits_filter_clause() {
        let request = SearchRequest::new("laptop");
        let document = build_search_document(&request, &resolved(), &SearchOptions::default());

        assert!(document["query"]["bool"].get("filter").is_none());
    }

    #[test]
    fn test_sorts_append_after_relevance() {
        let request = SearchRequest::new("laptop").sort("price", SortDirection::Asc);
        let document = build_search_document(&request, &resolved(), &SearchOptions::default());

        let sort = document["sort"].as_array().unwrap();
        assert_eq!(
            sort,
            &vec![
                json!({ "_score": { "order": "desc" } }),
                json!({ "price": { "order": "asc" } }),
            ]
        );
    }

    #[test]
    fn test_page_options() {
        let options = SearchOptions::page(3, 10);
        assert_eq!(options.from, Some(20));
        assert_eq!(options.size, Some(10));
    }

    #[test]
    fn test_page_zero_saturates() {
        let options = SearchOptions::page(0, 10);
        assert_eq!(options.from, Some(0));
    }

    #[test]
    fn test_params_merge_over_query_key() {
        let mut params = Map::new();
        params.insert("query".to_string(), json!("overridden"));
        let method = ResolvedMethod {
            name: "match_phrase".to_string(),
            params,
        };

        let request = SearchRequest::new("laptop");
        let document = build_search_document(&request, &method, &SearchOptions::default());

        // Later values win the merge, matching the method parameters'
        // precedence over the request text.
        let must = document["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must[0]["match_phrase"]["query"], json!("overridden"));
    }
}
