pub mod ports;
pub mod service;
pub mod use_cases;

pub use ports::{CatalogRepository, QueryPath, SearchOutcome};
pub use service::{CatalogService, FeaturedCategory};
