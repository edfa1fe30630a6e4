use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of bookable unit; fixed when the item is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Flight,
    Hotel,
    Train,
    Bus,
    Cab,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Flight => "flight",
            ItemType::Hotel => "hotel",
            ItemType::Train => "train",
            ItemType::Bus => "bus",
            ItemType::Cab => "cab",
        }
    }

    /// Whether items of this kind travel between two places
    pub fn is_route_based(&self) -> bool {
        !matches!(self, ItemType::Hotel)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
