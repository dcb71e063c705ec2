//! # Elastic Scout Engine
//!
//! This crate translates backend-agnostic search requests into the cluster's
//! native query language, batches document writes into single bulk calls,
//! and maps raw cluster responses back into ordered identifier sets with
//! pagination metadata. It sits between an application's model layer and a
//! search cluster's HTTP query interface.
//!
//! The [`SearchEngine`] facade orchestrates the pieces; collaborators
//! (backend transport, entity resolution) are injected through the traits in
//! [`interfaces`].

pub mod bulk;
pub mod engine;
pub mod errors;
pub mod interfaces;
pub mod mapper;
pub mod opensearch;
pub mod request;
pub mod translator;

pub use engine::SearchEngine;
pub use errors::EngineError;
pub use interfaces::{EntityResolver, QueryOverride, SearchBackend, Searchable};
pub use opensearch::{ConnectionConfig, OpenSearchBackend};
pub use request::SearchRequest;
