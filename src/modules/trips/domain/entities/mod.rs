pub mod trip;

pub use trip::{ItineraryDay, Trip, TripDraft};
