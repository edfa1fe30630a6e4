pub mod matcher;
pub mod normalizer;
pub mod query_planner;

pub use matcher::{AllOf, CarMatcher, FromMatcher, ItemMatcher, ToMatcher};
pub use normalizer::{normalize_location, normalize_term};
pub use query_planner::{FallbackReason, QueryPlan, QueryPlanner};
