/// Test helper functions and service builders
use std::sync::Arc;

use wayfarer::modules::catalog::infrastructure::persistence::TravelItemMapper;
use wayfarer::modules::catalog::{Category, TravelItem};
use wayfarer::modules::store::InMemoryDocumentStore;
use wayfarer::shared::config::{AppConfig, SearchConfig};
use wayfarer::{in_memory_store, AppState};

pub struct TestApp {
    pub store: Arc<InMemoryDocumentStore>,
    pub state: AppState,
}

/// Services over an empty in-memory store with production indexes
pub fn build_test_app() -> TestApp {
    build_test_app_with(SearchConfig::default())
}

pub fn build_test_app_with(search: SearchConfig) -> TestApp {
    let store = Arc::new(in_memory_store());
    let config = AppConfig {
        search,
        seed_demo_data: false,
        ..AppConfig::default()
    };
    let state = AppState::with_store(store.clone(), &config);
    TestApp { store, state }
}

pub fn seed(store: &InMemoryDocumentStore, category: Category, items: &[TravelItem]) {
    store.insert_many(
        category.collection_name(),
        items
            .iter()
            .map(|item| TravelItemMapper::to_document(item).expect("item encodes")),
    );
}

pub fn ids(items: &[TravelItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}
