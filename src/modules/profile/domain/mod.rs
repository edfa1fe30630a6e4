pub mod entities;
pub mod repositories;

pub use entities::{Booking, BookingStatus, UserProfile};
pub use repositories::{BookingRepository, ProfileRepository};
