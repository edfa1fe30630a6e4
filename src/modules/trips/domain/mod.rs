pub mod entities;
pub mod repositories;

pub use entities::{ItineraryDay, Trip, TripDraft};
pub use repositories::TripRepository;
