use async_trait::async_trait;

use crate::modules::trips::domain::entities::Trip;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn save(&self, trip: &Trip) -> AppResult<()>;

    async fn find_by_id(&self, trip_id: &str) -> AppResult<Option<Trip>>;

    async fn find_owned_by(&self, owner_id: &str) -> AppResult<Vec<Trip>>;

    /// Trips whose member list contains `user_id`
    async fn find_shared_with(&self, user_id: &str) -> AppResult<Vec<Trip>>;

    /// Array-union `user_id` into the trip's members
    async fn add_member(&self, trip_id: &str, user_id: &str) -> AppResult<()>;
}
