//! Search engine facade.
//!
//! This module orchestrates the translator, the backend collaborator, and
//! the result mapper behind one stateless entry point. Application code uses
//! this to search, paginate, and synchronize documents.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::bulk;
use crate::errors::EngineError;
use crate::interfaces::{EntityResolver, SearchBackend, Searchable};
use crate::mapper;
use crate::request::SearchRequest;
use crate::translator::{self, SearchOptions};
use elastic_scout_shared::{PaginatedResult, QueryConfig};

/// The main entry point for search and index synchronization.
///
/// Holds the backend collaborator and the immutable process-wide query
/// configuration; every public operation is one stateless request/response
/// cycle, so concurrent use from multiple callers needs no locking.
pub struct SearchEngine {
    backend: Arc<dyn SearchBackend>,
    config: QueryConfig,
}

impl SearchEngine {
    /// Create an engine with the default query configuration.
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            config: QueryConfig::default(),
        }
    }

    /// Create an engine with a custom query configuration.
    pub fn with_config(backend: Arc<dyn SearchBackend>, config: QueryConfig) -> Self {
        Self { backend, config }
    }

    /// Perform a search limited by the request's `limit`.
    ///
    /// Returns the raw cluster response; use [`Self::total_count`],
    /// [`Self::identifiers`], or [`Self::entities`] to interpret it.
    pub async fn search<M: Searchable>(
        &self,
        request: &SearchRequest,
    ) -> Result<Value, EngineError> {
        self.perform_search::<M>(request, SearchOptions::limit(request.limit))
            .await
    }

    /// Perform a search for one page of results and attach the page count.
    ///
    /// `page` is 1-based; `page_count = floor(total / page_size)`.
    pub async fn paginate<M: Searchable>(
        &self,
        request: &SearchRequest,
        page_size: u64,
        page: u64,
    ) -> Result<PaginatedResult, EngineError> {
        let raw = self
            .perform_search::<M>(request, SearchOptions::page(page, page_size))
            .await?;

        let result = mapper::parse(raw)?;
        let page_count = if page_size == 0 {
            0
        } else {
            result.total / page_size
        };

        Ok(PaginatedResult { result, page_count })
    }

    /// Upsert the given entities' documents in one bulk write.
    ///
    /// An empty batch is a no-op that skips the network call. Failures
    /// propagate unmodified; there is no retry at this layer.
    pub async fn update<M: Searchable>(&self, models: &[M]) -> Result<(), EngineError> {
        if models.is_empty() {
            return Ok(());
        }

        let operations = bulk::upsert_operations(models);
        debug!(
            index = M::index_name(),
            count = operations.len(),
            "Submitting bulk upsert"
        );
        self.backend
            .bulk(bulk::build_bulk_body(&operations))
            .await
            .map(|_| ())
    }

    /// Remove the given entities' documents in one bulk write.
    pub async fn delete<M: Searchable>(&self, models: &[M]) -> Result<(), EngineError> {
        if models.is_empty() {
            return Ok(());
        }

        let operations = bulk::delete_operations(models);
        debug!(
            index = M::index_name(),
            count = operations.len(),
            "Submitting bulk delete"
        );
        self.backend
            .bulk(bulk::build_bulk_body(&operations))
            .await
            .map(|_| ())
    }

    /// Remove every document of the resolver's entity type.
    ///
    /// Enumerates all entities ordered by primary identifier and deletes
    /// them in one sweep; used to rebuild an index from empty state.
    pub async fn flush<R: EntityResolver>(&self, resolver: &R) -> Result<(), EngineError> {
        let models = resolver.all_ordered().await?;
        debug!(
            index = <R::Entity as Searchable>::index_name(),
            count = models.len(),
            "Flushing all documents"
        );
        self.delete(&models).await
    }

    /// Total hit count of a raw response.
    pub fn total_count(&self, raw: &Value) -> Result<u64, EngineError> {
        mapper::total_count(raw)
    }

    /// Ranked hit identifiers of a raw response.
    pub fn identifiers(&self, raw: &Value) -> Result<Vec<String>, EngineError> {
        mapper::identifiers(raw)
    }

    /// Resolve a raw response's hits into domain entities, in rank order.
    pub async fn entities<R: EntityResolver>(
        &self,
        raw: &Value,
        resolver: &R,
    ) -> Result<Vec<R::Entity>, EngineError> {
        mapper::entities(raw, resolver).await
    }

    /// Translate and execute, or hand off to the request's override.
    ///
    /// The override check happens after translation but before anything is
    /// sent: the callback receives the would-be document and its return
    /// value goes back to the caller verbatim.
    async fn perform_search<M: Searchable>(
        &self,
        request: &SearchRequest,
        options: SearchOptions,
    ) -> Result<Value, EngineError> {
        let method = translator::resolve_method(&self.config, M::search_config().as_ref())?;
        let document = translator::build_search_document(request, &method, &options);

        if let Some(callback) = &request.callback {
            debug!(index = M::index_name(), "Search handled by request override");
            return callback
                .execute(self.backend.as_ref(), &request.query, document)
                .await;
        }

        debug!(index = M::index_name(), method = %method.name, "Executing search");
        self.backend.search(M::index_name(), document).await
    }
}
