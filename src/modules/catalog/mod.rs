pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CatalogRepository, CatalogService, FeaturedCategory, QueryPath, SearchOutcome};
pub use domain::{Category, ItemType, RawSearchFilters, SearchFilters, TravelItem};
pub use infrastructure::DocumentCatalogRepository;
