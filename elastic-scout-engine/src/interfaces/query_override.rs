//! Query override trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::EngineError;
use crate::interfaces::SearchBackend;

/// Escape hatch that bypasses query submission entirely.
///
/// When a request carries an override, the engine builds the query document
/// but sends nothing: the override receives the backend handle, the raw
/// query text, and the would-be document, and its return value is passed
/// back to the caller verbatim.
#[async_trait]
pub trait QueryOverride: Send + Sync {
    /// Run the override in place of the engine's own submission.
    async fn execute(
        &self,
        backend: &dyn SearchBackend,
        query: &str,
        document: Value,
    ) -> Result<Value, EngineError>;
}
