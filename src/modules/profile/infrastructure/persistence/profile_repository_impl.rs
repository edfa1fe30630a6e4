use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::modules::profile::domain::{entities::normalize_email, ProfileRepository, UserProfile};
use crate::modules::store::domain::{Document, DocumentStore, StructuredQuery};
use crate::shared::errors::{AppError, AppResult};

pub const USERS_COLLECTION: &str = "users";

pub struct ProfileRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

impl ProfileRepositoryImpl {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn find_by_uid(&self, uid: &str) -> AppResult<Option<UserProfile>> {
        match self.store.get(USERS_COLLECTION, uid).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let query = StructuredQuery::collection(USERS_COLLECTION)
            .where_eq("email", normalize_email(email))
            .limit(1);

        match self.store.run_query(&query).await?.first() {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        let document = Document::from_entity(&profile.uid, profile)?;
        self.store.set(USERS_COLLECTION, &document).await?;
        Ok(())
    }

    async fn add_loyalty_points(&self, uid: &str, points: u64) -> AppResult<()> {
        let delta = i64::try_from(points).map_err(|_| {
            AppError::ValidationError(format!("Loyalty increment too large: {}", points))
        })?;
        self.store
            .increment(USERS_COLLECTION, uid, "loyaltyPoints", delta)
            .await?;
        Ok(())
    }

    async fn add_shared_trip(&self, uid: &str, trip_id: &str) -> AppResult<()> {
        self.store
            .array_union(
                USERS_COLLECTION,
                uid,
                "sharedTripIds",
                vec![Value::String(trip_id.to_string())],
            )
            .await?;
        Ok(())
    }
}
