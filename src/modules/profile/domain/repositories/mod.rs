pub mod booking_repository;
pub mod profile_repository;

pub use booking_repository::BookingRepository;
pub use profile_repository::ProfileRepository;
