use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::modules::store::domain::{Document, DocumentStore, FieldFilter, StructuredQuery};
use crate::modules::trips::domain::{Trip, TripRepository};
use crate::shared::errors::AppResult;

pub const TRIPS_COLLECTION: &str = "trips";

pub struct TripRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

impl TripRepositoryImpl {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn query(&self, query: StructuredQuery) -> AppResult<Vec<Trip>> {
        let trips = self
            .store
            .run_query(&query)
            .await?
            .iter()
            .map(|doc| doc.decode::<Trip>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(trips)
    }
}

#[async_trait]
impl TripRepository for TripRepositoryImpl {
    async fn save(&self, trip: &Trip) -> AppResult<()> {
        let document = Document::from_entity(&trip.id, trip)?;
        self.store.set(TRIPS_COLLECTION, &document).await?;
        Ok(())
    }

    async fn find_by_id(&self, trip_id: &str) -> AppResult<Option<Trip>> {
        match self.store.get(TRIPS_COLLECTION, trip_id).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    async fn find_owned_by(&self, owner_id: &str) -> AppResult<Vec<Trip>> {
        self.query(StructuredQuery::collection(TRIPS_COLLECTION).where_eq("ownerId", owner_id))
            .await
    }

    async fn find_shared_with(&self, user_id: &str) -> AppResult<Vec<Trip>> {
        self.query(
            StructuredQuery::collection(TRIPS_COLLECTION)
                .filter(FieldFilter::array_contains("members", user_id)),
        )
        .await
    }

    async fn add_member(&self, trip_id: &str, user_id: &str) -> AppResult<()> {
        self.store
            .array_union(
                TRIPS_COLLECTION,
                trip_id,
                "members",
                vec![Value::String(user_id.to_string())],
            )
            .await?;
        Ok(())
    }
}
