//! Entity resolver trait definition.

use async_trait::async_trait;

use crate::errors::EngineError;
use crate::interfaces::Searchable;

/// Fetches domain entities for the identifiers a search returned.
///
/// Backed by whatever store owns the entities (a relational database, in
/// most deployments). The contract is deliberately loose: `resolve` may
/// return a superset of the requested identifiers and in any order; the
/// result mapper drops extraneous entities and restores cluster rank order.
#[async_trait]
pub trait EntityResolver: Send + Sync {
    /// The entity type this resolver produces.
    type Entity: Searchable;

    /// Fetch entities matching the given search keys.
    ///
    /// May return extra or reordered entities; callers must not rely on
    /// the output matching the input set or order.
    async fn resolve(&self, keys: &[String]) -> Result<Vec<Self::Entity>, EngineError>;

    /// Every entity of this type, ordered by primary identifier.
    ///
    /// Used by the flush sweep to remove a type's documents wholesale when
    /// rebuilding an index from empty state.
    async fn all_ordered(&self) -> Result<Vec<Self::Entity>, EngineError>;
}
