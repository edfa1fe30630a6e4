pub mod app_error;
pub mod store_error;

pub use app_error::{AppError, AppResult};
pub use store_error::{StoreError, StoreResult};
