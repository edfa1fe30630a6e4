pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::TripService;
pub use domain::{ItineraryDay, Trip, TripDraft, TripRepository};
pub use infrastructure::TripRepositoryImpl;
