use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::profile::domain::{entities::normalize_email, ProfileRepository};
use crate::modules::trips::domain::{ItineraryDay, Trip, TripDraft, TripRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Trip planning and collaborative sharing
pub struct TripService {
    trip_repository: Arc<dyn TripRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
}

impl TripService {
    pub fn new(
        trip_repository: Arc<dyn TripRepository>,
        profile_repository: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            trip_repository,
            profile_repository,
        }
    }

    pub async fn create_trip(&self, owner_id: &str, draft: TripDraft) -> AppResult<Trip> {
        Validator::validate_user_id(owner_id)?;

        let trip = Trip::create(owner_id, draft)?;
        self.trip_repository.save(&trip).await?;

        info!("Trip {} created by {}", trip.id, owner_id);
        Ok(trip)
    }

    pub async fn get_trip(&self, user_id: &str, trip_id: &str) -> AppResult<Trip> {
        Validator::validate_user_id(user_id)?;

        let trip = self.load(trip_id).await?;
        if !trip.can_view(user_id) {
            return Err(AppError::Unauthorized(format!(
                "Trip {} is not shared with you",
                trip_id
            )));
        }
        Ok(trip)
    }

    /// Share a trip with another registered user, identified by email.
    ///
    /// Both sides are updated with array-union writes so sharing again is a
    /// no-op. The trip side is written first.
    pub async fn share_trip(
        &self,
        owner_id: &str,
        trip_id: &str,
        recipient_email: &str,
    ) -> AppResult<Trip> {
        Validator::validate_user_id(owner_id)?;

        let mut trip = self.load(trip_id).await?;
        if !trip.is_owner(owner_id) {
            return Err(AppError::Unauthorized(
                "Only the trip owner can share it".to_string(),
            ));
        }

        let email = normalize_email(recipient_email);
        Validator::validate_email(&email)?;

        let recipient = self
            .profile_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user registered with {}", email)))?;

        if recipient.uid == owner_id {
            return Err(AppError::ValidationError(
                "You cannot share a trip with yourself".to_string(),
            ));
        }

        self.trip_repository
            .add_member(&trip.id, &recipient.uid)
            .await?;
        self.profile_repository
            .add_shared_trip(&recipient.uid, &trip.id)
            .await?;

        if trip.add_member(&recipient.uid) {
            info!("Trip {} shared with {}", trip.id, recipient.uid);
        } else {
            debug!("Trip {} was already shared with {}", trip.id, recipient.uid);
        }
        Ok(trip)
    }

    /// Owned and shared trips, ordered by start date
    pub async fn list_trips(&self, user_id: &str) -> AppResult<Vec<Trip>> {
        Validator::validate_user_id(user_id)?;

        let (owned, shared) = tokio::try_join!(
            self.trip_repository.find_owned_by(user_id),
            self.trip_repository.find_shared_with(user_id)
        )?;

        let mut seen = HashSet::new();
        let mut trips: Vec<Trip> = owned
            .into_iter()
            .chain(shared)
            .filter(|trip| seen.insert(trip.id.clone()))
            .collect();
        trips.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        debug!("{} trips visible to {}", trips.len(), user_id);
        Ok(trips)
    }

    /// Replace the day plan; owner and members may edit
    pub async fn update_itinerary(
        &self,
        user_id: &str,
        trip_id: &str,
        days: Vec<ItineraryDay>,
    ) -> AppResult<Trip> {
        let mut trip = self.get_trip(user_id, trip_id).await?;
        trip.replace_days(days)?;
        self.trip_repository.save(&trip).await?;
        Ok(trip)
    }

    async fn load(&self, trip_id: &str) -> AppResult<Trip> {
        self.trip_repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", trip_id)))
    }
}
