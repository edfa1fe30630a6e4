use async_trait::async_trait;

use crate::modules::profile::domain::entities::Booking;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save(&self, booking: &Booking) -> AppResult<()>;

    /// All bookings for a user, newest first
    async fn find_by_user(&self, uid: &str) -> AppResult<Vec<Booking>>;
}
