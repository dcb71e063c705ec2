//! Searchable capability trait.

use serde_json::Value;

use elastic_scout_shared::SearchConfig;

/// Typed capability for entity types that live in the search index.
///
/// Replaces dynamic attribute probing with an explicit contract: the type
/// names its index and document type, each instance provides its primary
/// identifier and searchable representation, and types that want custom
/// query behavior return a [`SearchConfig`] override. Absence of an
/// override is an explicit `None`, which falls back to the process-wide
/// default method.
pub trait Searchable: Send + Sync {
    /// Index the documents for this type live in (`_index`).
    fn index_name() -> &'static str;

    /// Document type submitted in bulk meta lines (`_type`).
    fn document_type() -> &'static str;

    /// Per-type query method override.
    fn search_config() -> Option<SearchConfig> {
        None
    }

    /// Primary identifier submitted as `_id`.
    fn search_key(&self) -> String;

    /// The serialized subset of this entity's fields submitted for indexing.
    fn to_search_document(&self) -> Value;
}
