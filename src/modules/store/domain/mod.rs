pub mod document;
pub mod query;
pub mod repository;

pub use document::{Document, ID_FIELD};
pub use query::{FieldFilter, FilterOp, StructuredQuery};
pub use repository::DocumentStore;

#[cfg(test)]
pub use repository::MockDocumentStore;
