pub mod travel_item;

pub use travel_item::TravelItem;
