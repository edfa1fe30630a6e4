pub mod category;
pub mod item_type;
pub mod search_filters;

pub use category::Category;
pub use item_type::ItemType;
pub use search_filters::{RawSearchFilters, SearchFilters};
