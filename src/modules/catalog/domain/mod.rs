pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::TravelItem;
pub use services::{FallbackReason, ItemMatcher, QueryPlan, QueryPlanner};
pub use value_objects::{Category, ItemType, RawSearchFilters, SearchFilters};
