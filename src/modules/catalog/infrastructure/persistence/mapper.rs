use serde_json::Value;

use crate::modules::catalog::domain::{Category, TravelItem};
use crate::modules::store::domain::Document;
use crate::shared::errors::StoreResult;

pub struct TravelItemMapper;

impl TravelItemMapper {
    /// Decode one document. A missing `type` is taken from the collection.
    pub fn to_domain(category: Category, document: &Document) -> StoreResult<TravelItem> {
        if document.fields.contains_key("type") {
            return document.decode();
        }

        let mut document = document.clone();
        document.fields.insert(
            "type".to_string(),
            Value::String(category.item_type().as_str().to_string()),
        );
        document.decode()
    }

    /// Decode a batch, skipping (and logging) documents that do not fit
    pub fn to_domain_batch(category: Category, documents: Vec<Document>) -> Vec<TravelItem> {
        documents
            .iter()
            .filter_map(|doc| match Self::to_domain(category, doc) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping malformed {} document {}: {}", category, doc.id, e);
                    None
                }
            })
            .collect()
    }

    /// Decode a batch, failing on the first document that does not fit
    pub fn to_domain_all(category: Category, documents: &[Document]) -> StoreResult<Vec<TravelItem>> {
        documents
            .iter()
            .map(|doc| Self::to_domain(category, doc))
            .collect()
    }

    pub fn to_document(item: &TravelItem) -> StoreResult<Document> {
        Document::from_entity(&item.id, item)
    }
}
