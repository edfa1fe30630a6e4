use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::item_type::ItemType;
use crate::shared::errors::AppError;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A partition of bookable items, mapped 1:1 to a store collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flights,
    Hotels,
    Trains,
    Buses,
    Cabs,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Flights,
        Category::Hotels,
        Category::Trains,
        Category::Buses,
        Category::Cabs,
    ];

    pub fn collection_name(&self) -> &'static str {
        match self {
            Category::Flights => "flights",
            Category::Hotels => "hotels",
            Category::Trains => "trains",
            Category::Buses => "buses",
            Category::Cabs => "cabs",
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            Category::Flights => ItemType::Flight,
            Category::Hotels => ItemType::Hotel,
            Category::Trains => ItemType::Train,
            Category::Buses => ItemType::Bus,
            Category::Cabs => ItemType::Cab,
        }
    }

    fn closest(input: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .map(|c| (*c, strsim::jaro_winkler(input, c.collection_name())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.collection_name())
    }
}

impl From<ItemType> for Category {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Flight => Category::Flights,
            ItemType::Hotel => Category::Hotels,
            ItemType::Train => Category::Trains,
            ItemType::Bus => Category::Buses,
            ItemType::Cab => Category::Cabs,
        }
    }
}

/// Unknown names are a caller error, never an empty result
impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "flights" | "flight" => Ok(Category::Flights),
            "hotels" | "hotel" => Ok(Category::Hotels),
            "trains" | "train" => Ok(Category::Trains),
            "buses" | "bus" => Ok(Category::Buses),
            "cabs" | "cab" => Ok(Category::Cabs),
            _ => {
                let hint = Category::closest(&normalized)
                    .map(|c| format!(", did you mean '{}'?", c))
                    .unwrap_or_default();
                Err(AppError::ValidationError(format!(
                    "Unknown category '{}'{}",
                    s.trim(),
                    hint
                )))
            }
        }
    }
}
