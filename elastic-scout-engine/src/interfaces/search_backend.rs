//! Search backend trait definition.
//!
//! This module defines the abstract interface for the cluster transport,
//! allowing for different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::EngineError;

/// Abstracts the search cluster's HTTP interface.
///
/// Implementations own everything below the wire format: connection pooling,
/// TLS, timeouts. The engine issues exactly one call through this trait per
/// public operation and propagates failures unmodified; retries and backoff
/// are an implementation concern, not the engine's.
///
/// Responses are raw JSON shaped as
/// `{ "hits": { "total": { "value": n }, "hits": [ { "_id", ... } ] } }`
/// for searches; the result mapper interprets them.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute a query document against the given index.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index name
    /// * `body` - The translated query document
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The raw search response
    /// * `Err(EngineError)` - If the request fails
    async fn search(&self, index: &str, body: Value) -> Result<Value, EngineError>;

    /// Submit one batched write.
    ///
    /// `lines` are the paired meta/document lines of a bulk request, in the
    /// exact order they should reach the cluster.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The raw bulk response
    /// * `Err(EngineError)` - If the request fails
    async fn bulk(&self, lines: Vec<Value>) -> Result<Value, EngineError>;
}
