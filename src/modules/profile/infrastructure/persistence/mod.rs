pub mod booking_repository_impl;
pub mod profile_repository_impl;

pub use booking_repository_impl::BookingRepositoryImpl;
pub use profile_repository_impl::ProfileRepositoryImpl;
