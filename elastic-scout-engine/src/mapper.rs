//! Raw response interpretation.
//!
//! This module extracts total counts, ranked identifiers, and typed views
//! from raw search responses, and turns ranked identifiers back into domain
//! entities through an [`EntityResolver`]. Missing structure is a contract
//! violation of the backend and surfaces as `MalformedResponse`; it is never
//! silently defaulted to zero.

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::EngineError;
use crate::interfaces::{EntityResolver, Searchable};
use elastic_scout_shared::{SearchHit, SearchResult};

/// Total hit count from `hits.total.value`.
pub fn total_count(raw: &Value) -> Result<u64, EngineError> {
    raw.pointer("/hits/total/value")
        .and_then(Value::as_u64)
        .ok_or_else(|| EngineError::malformed_response("response is missing hits.total.value"))
}

/// Hit identifiers in cluster-provided rank order.
pub fn identifiers(raw: &Value) -> Result<Vec<String>, EngineError> {
    hits(raw)?
        .iter()
        .map(|hit| {
            hit.get("_id")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| EngineError::malformed_response("hit is missing _id"))
        })
        .collect()
}

/// Parse a raw response into a typed [`SearchResult`], retaining the raw
/// payload for downstream mapping.
pub fn parse(raw: Value) -> Result<SearchResult, EngineError> {
    let total = total_count(&raw)?;
    let hits = hits(&raw)?
        .iter()
        .map(|hit| {
            let id = hit
                .get("_id")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| EngineError::malformed_response("hit is missing _id"))?;
            Ok(SearchHit {
                id,
                score: hit.get("_score").and_then(Value::as_f64),
                source: hit.get("_source").cloned().unwrap_or(Value::Null),
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    Ok(SearchResult { total, hits, raw })
}

/// Resolve a response's ranked identifiers into domain entities.
///
/// A zero total returns an empty collection immediately, regardless of the
/// hits array contents. Otherwise the resolver is asked for the ranked
/// identifier set; entities it returns beyond that set are dropped, and the
/// survivors are emitted in the original rank order even when the resolver
/// reorders them.
pub async fn entities<R: EntityResolver>(
    raw: &Value,
    resolver: &R,
) -> Result<Vec<R::Entity>, EngineError> {
    if total_count(raw)? == 0 {
        return Ok(Vec::new());
    }

    let keys = identifiers(raw)?;
    let resolved = resolver.resolve(&keys).await?;

    let mut by_key: HashMap<String, R::Entity> = resolved
        .into_iter()
        .map(|entity| (entity.search_key(), entity))
        .collect();

    Ok(keys.iter().filter_map(|key| by_key.remove(key)).collect())
}

fn hits(raw: &Value) -> Result<&[Value], EngineError> {
    raw.pointer("/hits/hits")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| EngineError::malformed_response("response is missing hits.hits"))
}
