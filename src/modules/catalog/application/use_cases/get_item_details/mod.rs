mod handler;
mod query;

pub use handler::GetItemDetailsHandler;
pub use query::GetItemDetailsQuery;
