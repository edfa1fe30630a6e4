pub mod persistence;

pub use persistence::TripRepositoryImpl;
