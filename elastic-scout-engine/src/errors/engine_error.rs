//! Engine error types.
//!
//! This module defines the error types that can occur while translating,
//! submitting, or interpreting search cluster operations.

use thiserror::Error;

/// Errors that can occur during search engine operations.
///
/// An empty result set is not an error: zero hits yields a valid empty
/// collection through the result mapper.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Transport or connection failure talking to the cluster. Surfaced
    /// unmodified to the caller; no retry happens at this layer.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The cluster answered with a non-success HTTP status.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// No query method could be resolved for the entity type and no
    /// process-wide default exists.
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    /// The raw response is missing expected fields. A contract violation of
    /// the backend collaborator, never silently defaulted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The entity resolver collaborator failed.
    #[error("Resolver error: {0}")]
    ResolverError(String),
}

impl EngineError {
    /// Create a backend unavailable error.
    pub fn backend_unavailable(msg: impl Into<String>) -> Self {
        Self::BackendUnavailable(msg.into())
    }

    /// Create a request failed error.
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration missing error.
    pub fn configuration_missing(msg: impl Into<String>) -> Self {
        Self::ConfigurationMissing(msg.into())
    }

    /// Create a malformed response error.
    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a resolver error.
    pub fn resolver(msg: impl Into<String>) -> Self {
        Self::ResolverError(msg.into())
    }
}
