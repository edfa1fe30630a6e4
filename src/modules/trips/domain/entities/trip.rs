use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// One day of an itinerary; `day` is 1-based
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl ItineraryDay {
    pub fn new(day: u32, activities: Vec<String>) -> Self {
        Self { day, activities }
    }
}

/// Caller input for a new trip
#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<ItineraryDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
    #[serde(default)]
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn create(owner_id: &str, draft: TripDraft) -> AppResult<Self> {
        Validator::validate_trip_title(&draft.title)?;
        Validator::validate_date_range(draft.start_date, draft.end_date)?;

        let mut trip = Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: draft.title.trim().to_string(),
            destination: draft.destination.trim().to_string(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            days: Vec::new(),
            members: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        trip.replace_days(draft.days)?;
        Ok(trip)
    }

    /// Number of calendar days, both ends included
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m == user_id)
    }

    pub fn can_view(&self, user_id: &str) -> bool {
        self.is_owner(user_id) || self.is_member(user_id)
    }

    /// Set-like insert; the owner is never a member. Returns whether the
    /// member list changed.
    pub fn add_member(&mut self, user_id: &str) -> bool {
        if self.can_view(user_id) {
            return false;
        }
        self.members.push(user_id.to_string());
        true
    }

    /// Replace the day plan. Days are re-ordered by day number and must be
    /// unique and fall inside the trip.
    pub fn replace_days(&mut self, mut days: Vec<ItineraryDay>) -> AppResult<()> {
        days.sort_by_key(|d| d.day);

        let duration = self.duration_days();
        for pair in days.windows(2) {
            if pair[0].day == pair[1].day {
                return Err(AppError::ValidationError(format!(
                    "Day {} appears more than once",
                    pair[0].day
                )));
            }
        }
        if let Some(day) = days.iter().find(|d| d.day == 0 || d.day > duration) {
            return Err(AppError::ValidationError(format!(
                "Day {} is outside the {}-day trip",
                day.day, duration
            )));
        }

        self.days = days;
        self.updated_at = Utc::now();
        Ok(())
    }
}
