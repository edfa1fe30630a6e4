mod handler;
mod query;
mod result;

pub use handler::SearchCategoryHandler;
pub use query::SearchCategoryQuery;
pub use result::SearchCategoryResult;
