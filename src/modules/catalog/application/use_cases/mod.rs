pub mod get_item_details;
pub mod search_category;

pub use get_item_details::{GetItemDetailsHandler, GetItemDetailsQuery};
pub use search_category::{SearchCategoryHandler, SearchCategoryQuery, SearchCategoryResult};
