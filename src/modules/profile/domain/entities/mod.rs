pub mod booking;
pub mod user_profile;

pub use booking::{Booking, BookingStatus};
pub use user_profile::{normalize_email, UserProfile};
