use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::{ItemType, TravelItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

/// A completed checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    pub item_type: ItemType,
    pub item_title: String,
    pub travelers: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub points_earned: u64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Price the item for `travelers` and award one point per
    /// `currency_units_per_point` spent (rounded down)
    pub fn confirm(
        user_id: &str,
        item: &TravelItem,
        travelers: u32,
        currency_units_per_point: u64,
    ) -> Self {
        let total_price = round_currency(item.price * travelers as f64);
        let points_earned = if currency_units_per_point == 0 {
            0
        } else {
            (total_price / currency_units_per_point as f64).floor() as u64
        };

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            item_id: item.id.clone(),
            item_type: item.item_type,
            item_title: item.title.clone(),
            travelers,
            unit_price: item.price,
            total_price,
            points_earned,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}

fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
