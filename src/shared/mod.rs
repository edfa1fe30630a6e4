// Shared Kernel - cross-cutting concerns used by every bounded context

pub mod application; // Pagination, use case traits
pub mod config; // Environment configuration
pub mod errors; // Shared error types
pub mod utils; // Logging, validation

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
