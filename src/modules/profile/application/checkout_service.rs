use log::{info, warn};
use std::sync::Arc;

use crate::modules::catalog::{CatalogService, Category};
use crate::modules::profile::domain::{Booking, BookingRepository, ProfileRepository};
use crate::shared::config::LoyaltyConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Turns a catalog item into a confirmed booking and credits loyalty points.
///
/// The booking is written before the points increment. If the increment
/// fails the booking stands and the error is returned to the caller.
pub struct CheckoutService {
    catalog: Arc<CatalogService>,
    profile_repository: Arc<dyn ProfileRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    loyalty: LoyaltyConfig,
}

impl CheckoutService {
    pub fn new(
        catalog: Arc<CatalogService>,
        profile_repository: Arc<dyn ProfileRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        loyalty: LoyaltyConfig,
    ) -> Self {
        Self {
            catalog,
            profile_repository,
            booking_repository,
            loyalty,
        }
    }

    pub async fn checkout(
        &self,
        uid: &str,
        category: Category,
        item_id: &str,
        travelers: u32,
    ) -> AppResult<Booking> {
        Validator::validate_user_id(uid)?;
        Validator::validate_travelers(travelers)?;

        if self.profile_repository.find_by_uid(uid).await?.is_none() {
            return Err(AppError::NotFound(format!("Profile {} not found", uid)));
        }

        let item = self.catalog.get_item(category, item_id).await?;
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(AppError::ValidationError(format!(
                "Item {} has no bookable price",
                item.id
            )));
        }

        let booking = Booking::confirm(uid, &item, travelers, self.loyalty.currency_units_per_point);
        self.booking_repository.save(&booking).await?;

        if booking.points_earned > 0 {
            if let Err(e) = self
                .profile_repository
                .add_loyalty_points(uid, booking.points_earned)
                .await
            {
                warn!(
                    "Booking {} saved but crediting {} points to {} failed: {}",
                    booking.id, booking.points_earned, uid, e
                );
                return Err(e);
            }
        }

        info!(
            "Booking {} confirmed for {}: {} x{} = {:.2} (+{} points)",
            booking.id, uid, booking.item_title, travelers, booking.total_price, booking.points_earned
        );
        Ok(booking)
    }

    pub async fn list_bookings(&self, uid: &str) -> AppResult<Vec<Booking>> {
        Validator::validate_user_id(uid)?;
        self.booking_repository.find_by_user(uid).await
    }
}
