pub mod trip_repository_impl;

pub use trip_repository_impl::TripRepositoryImpl;
