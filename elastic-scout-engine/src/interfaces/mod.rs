//! Collaborator contracts for the search engine.
//!
//! This module defines the abstract traits the engine depends on: the
//! backend transport, the entity resolver, the typed searchable capability,
//! and the query override escape hatch. Implementations are injected into
//! [`crate::SearchEngine`] to enable dependency injection and easy testing
//! with mocks.

mod entity_resolver;
mod query_override;
mod search_backend;
mod searchable;

pub use entity_resolver::EntityResolver;
pub use query_override::QueryOverride;
pub use search_backend::SearchBackend;
pub use searchable::Searchable;
