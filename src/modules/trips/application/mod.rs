pub mod service;

pub use service::TripService;
