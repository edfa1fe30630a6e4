pub mod demo_data;
pub mod persistence;

pub use persistence::{DocumentCatalogRepository, TravelItemMapper};
