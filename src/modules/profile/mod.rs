pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CheckoutService, ProfileService};
pub use domain::{Booking, BookingRepository, BookingStatus, ProfileRepository, UserProfile};
pub use infrastructure::{BookingRepositoryImpl, ProfileRepositoryImpl};
