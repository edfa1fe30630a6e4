use async_trait::async_trait;
use serde_json::Value;

use super::{document::Document, query::StructuredQuery};
use crate::shared::errors::StoreResult;

/// Port (interface) for the managed document database
///
/// Adapters may refuse query shapes they cannot serve (missing composite
/// index, unsupported filter mix) with `StoreError::QueryRejected`; callers
/// decide whether that is recoverable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short adapter name for logs
    fn backend_name(&self) -> &'static str;

    /// Server-side count of documents matching the query's filters
    async fn count(&self, query: &StructuredQuery) -> StoreResult<u64>;

    /// Run a filtered, paginated query; documents come back in id order
    async fn run_query(&self, query: &StructuredQuery) -> StoreResult<Vec<Document>>;

    /// Fetch one document by id
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Create or fully replace a document
    async fn set(&self, collection: &str, document: &Document) -> StoreResult<()>;

    /// Append values to an array field, skipping ones already present.
    /// The document must exist.
    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        values: Vec<Value>,
    ) -> StoreResult<()>;

    /// Atomically add `delta` to an integer field. The document must exist.
    async fn increment(&self, collection: &str, id: &str, field: &str, delta: i64)
        -> StoreResult<()>;
}
