pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{Document, DocumentStore, FieldFilter, FilterOp, StructuredQuery};
pub use infrastructure::{FirestoreDocumentStore, InMemoryDocumentStore};
