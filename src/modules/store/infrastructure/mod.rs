pub mod firestore;
pub mod memory_store;

pub use firestore::FirestoreDocumentStore;
pub use memory_store::InMemoryDocumentStore;
