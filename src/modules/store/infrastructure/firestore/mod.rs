pub mod client;
pub mod codec;
pub mod rate_limit;

pub use client::FirestoreDocumentStore;
