//! Bulk write builders.
//!
//! This module batches create/update/delete operations into the paired
//! meta/document lines of a single bulk write. Operations are emitted in
//! input iteration order and no chunking is performed: one call produces
//! exactly one batched write regardless of size, so very large batches are
//! the caller's responsibility to split.

use serde_json::{json, Value};

use crate::interfaces::Searchable;

/// One operation inside a batched write.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOperation {
    /// Create the document or update it in place. Replays produce the same
    /// final state.
    Upsert {
        id: String,
        index: String,
        doc_type: String,
        document: Value,
    },
    /// Remove the document.
    Delete {
        id: String,
        index: String,
        doc_type: String,
    },
}

impl BulkOperation {
    /// Build the upsert operation for one entity.
    pub fn upsert_for<M: Searchable>(model: &M) -> Self {
        BulkOperation::Upsert {
            id: model.search_key(),
            index: M::index_name().to_string(),
            doc_type: M::document_type().to_string(),
            document: model.to_search_document(),
        }
    }

    /// Build the delete operation for one entity.
    pub fn delete_for<M: Searchable>(model: &M) -> Self {
        BulkOperation::Delete {
            id: model.search_key(),
            index: M::index_name().to_string(),
            doc_type: M::document_type().to_string(),
        }
    }

    /// Append this operation's wire lines: the meta line, and for upserts
    /// the document body flagged as an upsert.
    fn append_lines(&self, lines: &mut Vec<Value>) {
        match self {
            BulkOperation::Upsert {
                id,
                index,
                doc_type,
                document,
            } => {
                lines.push(json!({
                    "update": {
                        "_id": id,
                        "_index": index,
                        "_type": doc_type,
                    }
                }));
                lines.push(json!({
                    "doc": document,
                    "doc_as_upsert": true,
                }));
            }
            BulkOperation::Delete {
                id,
                index,
                doc_type,
            } => {
                lines.push(json!({
                    "delete": {
                        "_id": id,
                        "_index": index,
                        "_type": doc_type,
                    }
                }));
            }
        }
    }
}

/// Upsert operations for a batch of entities, in input order.
pub fn upsert_operations<M: Searchable>(models: &[M]) -> Vec<BulkOperation> {
    models.iter().map(BulkOperation::upsert_for).collect()
}

/// Delete operations for a batch of entities, in input order.
pub fn delete_operations<M: Searchable>(models: &[M]) -> Vec<BulkOperation> {
    models.iter().map(BulkOperation::delete_for).collect()
}

/// Flatten operations into the bulk request's line sequence.
pub fn build_bulk_body(operations: &[BulkOperation]) -> Vec<Value> {
    let mut lines = Vec::new();
    for operation in operations {
        operation.append_lines(&mut lines);
    }
    lines
}
