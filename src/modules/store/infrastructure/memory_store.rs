use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::modules::store::domain::{Document, DocumentStore, StructuredQuery};
use crate::shared::errors::{StoreError, StoreResult};

type Collection = BTreeMap<String, Map<String, Value>>;

/// In-process document store
///
/// Behaves like the managed store where it matters to callers: documents are
/// returned in id order, equality filters are exact, and a query filtering
/// on two or more distinct fields is rejected unless a composite index for
/// that field set has been declared. Used for local runs and tests.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: DashMap<String, Collection>,
    composite_indexes: DashSet<(String, Vec<String>)>,
    rejecting_collections: DashSet<String>,
    unavailable: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a composite index so multi-field queries on it are served
    pub fn with_composite_index(self, collection: &str, fields: &[&str]) -> Self {
        let mut fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        fields.sort();
        fields.dedup();
        self.composite_indexes
            .insert((collection.to_string(), fields));
        self
    }

    /// Reject every filtered query on `collection`, simulating an
    /// unsupported query shape
    pub fn reject_filtered_queries(&self, collection: &str) {
        self.rejecting_collections.insert(collection.to_string());
    }

    /// Toggle a simulated outage; every operation fails while set
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert(&self, collection: &str, document: Document) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(document.id, document.fields);
    }

    pub fn insert_many<I>(&self, collection: &str, documents: I)
    where
        I: IntoIterator<Item = Document>,
    {
        let mut entry = self.collections.entry(collection.to_string()).or_default();
        for document in documents {
            entry.insert(document.id, document.fields);
        }
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|c| c.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                message: "in-memory store is marked unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn check_query_shape(&self, query: &StructuredQuery) -> StoreResult<()> {
        if query.is_unfiltered() {
            return Ok(());
        }

        if self.rejecting_collections.contains(&query.collection) {
            return Err(StoreError::QueryRejected {
                reason: format!("filtered queries on '{}' are not supported", query.collection),
            });
        }

        let fields = query.filtered_fields();
        if fields.len() > 1
            && !self
                .composite_indexes
                .contains(&(query.collection.clone(), fields.clone()))
        {
            return Err(StoreError::QueryRejected {
                reason: format!(
                    "the query requires a composite index on {}({})",
                    query.collection,
                    fields.join(", ")
                ),
            });
        }

        Ok(())
    }

    fn matching(&self, query: &StructuredQuery) -> Vec<Document> {
        let Some(collection) = self.collections.get(&query.collection) else {
            return Vec::new();
        };

        let matches = collection
            .iter()
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .filter(|doc| query.matches(doc))
            .skip(query.offset);

        match query.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn count(&self, query: &StructuredQuery) -> StoreResult<u64> {
        self.ensure_available()?;
        self.check_query_shape(query)?;
        Ok(self.matching(query).len() as u64)
    }

    async fn run_query(&self, query: &StructuredQuery) -> StoreResult<Vec<Document>> {
        self.ensure_available()?;
        self.check_query_shape(query)?;
        Ok(self.matching(query))
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.ensure_available()?;
        Ok(self
            .collections
            .get(collection)
            .and_then(|c| c.get(id).cloned())
            .map(|fields| Document::new(id, fields)))
    }

    async fn set(&self, collection: &str, document: &Document) -> StoreResult<()> {
        self.ensure_available()?;
        self.insert(collection, document.clone());
        Ok(())
    }

    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        values: Vec<Value>,
    ) -> StoreResult<()> {
        self.ensure_available()?;
        let mut entry = self.collections.entry(collection.to_string()).or_default();
        let fields = entry.get_mut(id).ok_or_else(|| StoreError::NotFound {
            resource: format!("{}/{}", collection, id),
        })?;

        let slot = fields
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !slot.is_array() {
            *slot = Value::Array(Vec::new());
        }
        if let Value::Array(existing) = slot {
            for value in values {
                if !existing.contains(&value) {
                    existing.push(value);
                }
            }
        }
        Ok(())
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        delta: i64,
    ) -> StoreResult<()> {
        self.ensure_available()?;
        let mut entry = self.collections.entry(collection.to_string()).or_default();
        let fields = entry.get_mut(id).ok_or_else(|| StoreError::NotFound {
            resource: format!("{}/{}", collection, id),
        })?;

        let current = fields.get(field).and_then(Value::as_i64).unwrap_or(0);
        fields.insert(field.to_string(), Value::from(current.saturating_add(delta)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, value: Value) -> Document {
        Document::new(id, value.as_object().cloned().unwrap())
    }

    fn seeded() -> InMemoryDocumentStore {
        let store = InMemoryDocumentStore::new();
        store.insert_many(
            "flights",
            vec![
                doc("f-3", json!({ "from": "Mumbai", "to": "Goa" })),
                doc("f-1", json!({ "from": "Delhi", "to": "Goa" })),
                doc("f-2", json!({ "from": "Mumbai", "to": "Pune" })),
            ],
        );
        store
    }

    #[tokio::test]
    async fn returns_documents_in_id_order() {
        let store = seeded();
        let docs = store
            .run_query(&StructuredQuery::collection("flights"))
            .await
            .unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["f-1", "f-2", "f-3"]);
    }

    #[tokio::test]
    async fn single_field_equality_needs_no_index() {
        let store = seeded();
        let query = StructuredQuery::collection("flights").where_eq("to", "Goa");
        assert_eq!(store.count(&query).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn multi_field_query_without_index_is_rejected() {
        let store = seeded();
        let query = StructuredQuery::collection("flights")
            .where_eq("from", "Mumbai")
            .where_eq("to", "Goa");

        let err = store.run_query(&query).await.unwrap_err();
        assert!(err.is_query_rejection());

        let indexed = seeded().with_composite_index("flights", &["to", "from"]);
        let docs = indexed.run_query(&query).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "f-3");
    }

    #[tokio::test]
    async fn offset_and_limit_apply_after_filtering() {
        let store = seeded();
        let query = StructuredQuery::collection("flights").offset(1).limit(1);
        let docs = store.run_query(&query).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "f-2");
    }

    #[tokio::test]
    async fn outage_fails_every_operation() {
        let store = seeded();
        store.set_unavailable(true);
        assert!(matches!(
            store.get("flights", "f-1").await,
            Err(StoreError::Unavailable { .. })
        ));
        store.set_unavailable(false);
        assert!(store.get("flights", "f-1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn array_union_skips_existing_values() {
        let store = InMemoryDocumentStore::new();
        store.insert("trips", doc("t-1", json!({ "members": ["u-1"] })));

        store
            .array_union("trips", "t-1", "members", vec![json!("u-1"), json!("u-2")])
            .await
            .unwrap();

        let trip = store.get("trips", "t-1").await.unwrap().unwrap();
        assert_eq!(trip.get("members"), Some(&json!(["u-1", "u-2"])));
    }

    #[tokio::test]
    async fn writes_to_missing_documents_fail() {
        let store = InMemoryDocumentStore::new();
        let err = store.increment("users", "ghost", "loyaltyPoints", 5).await;
        assert!(matches!(err, Err(StoreError::NotFound { .. })));
    }
}
