use async_trait::async_trait;

use crate::modules::profile::domain::entities::UserProfile;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_uid(&self, uid: &str) -> AppResult<Option<UserProfile>>;

    /// Lookup by normalized (trimmed, lower-cased) email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>>;

    async fn save(&self, profile: &UserProfile) -> AppResult<()>;

    /// Store-side atomic increment of the loyalty balance
    async fn add_loyalty_points(&self, uid: &str, points: u64) -> AppResult<()>;

    /// Array-union the trip id into the profile's shared trips
    async fn add_shared_trip(&self, uid: &str, trip_id: &str) -> AppResult<()>;
}
