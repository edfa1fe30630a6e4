use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::ItemType;

/// A bookable unit (flight, hotel room, train, bus or cab)
///
/// Read-only from the catalog's perspective. Location data is inconsistently
/// populated: `from`/`to` may be unset while `subtitle` carries the place as
/// its leading comma-separated segment (`"Mumbai, India • City Center"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TravelItem {
    /// First comma-separated segment of the subtitle, trimmed
    pub fn subtitle_location(&self) -> Option<&str> {
        self.subtitle
            .split(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Details joined with single spaces, in display order
    pub fn details_text(&self) -> String {
        self.details.join(" ")
    }

    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0 && (0.0..=5.0).contains(&self.rating)
    }
}
