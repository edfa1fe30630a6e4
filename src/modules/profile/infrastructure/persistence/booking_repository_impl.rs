use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::profile::domain::{Booking, BookingRepository};
use crate::modules::store::domain::{Document, DocumentStore, StructuredQuery};
use crate::shared::errors::AppResult;

pub const BOOKINGS_COLLECTION: &str = "bookings";

pub struct BookingRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

impl BookingRepositoryImpl {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn save(&self, booking: &Booking) -> AppResult<()> {
        let document = Document::from_entity(&booking.id, booking)?;
        self.store.set(BOOKINGS_COLLECTION, &document).await?;
        Ok(())
    }

    async fn find_by_user(&self, uid: &str) -> AppResult<Vec<Booking>> {
        let query = StructuredQuery::collection(BOOKINGS_COLLECTION).where_eq("userId", uid);

        let mut bookings = self
            .store
            .run_query(&query)
            .await?
            .iter()
            .map(|doc| doc.decode::<Booking>())
            .collect::<Result<Vec<_>, _>>()?;

        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }
}
