//! OpenSearch backend implementation.

use async_trait::async_trait;
use opensearch::cat::CatIndicesParts;
use opensearch::http::request::JsonBody;
use opensearch::http::response::Response;
use opensearch::{BulkParts, OpenSearch, SearchParts};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::errors::EngineError;
use crate::interfaces::SearchBackend;
use crate::opensearch::ConnectionConfig;

/// OpenSearch-backed implementation of [`SearchBackend`].
///
/// Owns the HTTP transport; everything above the wire (query translation,
/// bulk batching, response mapping) lives in the engine. No retry, timeout,
/// or backoff is added here beyond what the client library provides.
pub struct OpenSearchBackend {
    client: OpenSearch,
}

impl OpenSearchBackend {
    /// Create a backend from the given connection settings.
    pub fn new(config: &ConnectionConfig) -> Result<Self, EngineError> {
        let transport = config.build_transport()?;

        info!(
            hosts = ?config.hosts,
            verify_tls = config.verify_tls,
            "Created OpenSearch backend"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Check that the cluster is reachable.
    pub async fn health_check(&self) -> Result<bool, EngineError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| EngineError::backend_unavailable(e.to_string()))?;

        Ok(response.status_code().is_success())
    }

    /// List the cluster's indices via the cat API, one JSON row per index.
    pub async fn cat_indices(&self) -> Result<Vec<Value>, EngineError> {
        let response = self
            .client
            .cat()
            .indices(CatIndicesParts::None)
            .format("json")
            .send()
            .await
            .map_err(|e| EngineError::backend_unavailable(e.to_string()))?;

        let rows = Self::read_response(response).await?;
        rows.as_array()
            .cloned()
            .ok_or_else(|| EngineError::malformed_response("cat indices response is not an array"))
    }

    /// Turn an HTTP response into its JSON body, mapping non-success
    /// statuses to `RequestFailed`.
    async fn read_response(response: Response) -> Result<Value, EngineError> {
        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Cluster request failed");
            return Err(EngineError::request_failed(status.as_u16(), body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| EngineError::malformed_response(e.to_string()))
    }
}

#[async_trait]
impl SearchBackend for OpenSearchBackend {
    async fn search(&self, index: &str, body: Value) -> Result<Value, EngineError> {
        debug!(index = %index, "Executing search");

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(|e| EngineError::backend_unavailable(e.to_string()))?;

        Self::read_response(response).await
    }

    async fn bulk(&self, lines: Vec<Value>) -> Result<Value, EngineError> {
        debug!(lines = lines.len(), "Executing bulk write");

        let body: Vec<JsonBody<Value>> = lines.into_iter().map(Into::into).collect();
        let response = self
            .client
            .bulk(BulkParts::None)
            .body(body)
            .send()
            .await
            .map_err(|e| EngineError::backend_unavailable(e.to_string()))?;

        Self::read_response(response).await
    }
}
