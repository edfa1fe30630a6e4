pub mod catalog;
pub mod profile;
pub mod store;
pub mod trips;
