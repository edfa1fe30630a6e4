pub mod persistence;

pub use persistence::{BookingRepositoryImpl, ProfileRepositoryImpl};
