pub mod catalog_repository_impl;
pub mod mapper;

pub use catalog_repository_impl::DocumentCatalogRepository;
pub use mapper::TravelItemMapper;
