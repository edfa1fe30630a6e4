use async_trait::async_trait;
use std::sync::Arc;

use super::mapper::TravelItemMapper;
use crate::modules::catalog::application::ports::{CatalogRepository, QueryPath, SearchOutcome};
use crate::modules::catalog::domain::{
    Category, ItemMatcher, QueryPlan, QueryPlanner, SearchFilters, TravelItem,
};
use crate::modules::store::domain::{DocumentStore, StructuredQuery};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::config::SearchConfig;
use crate::shared::errors::{AppResult, StoreError, StoreResult};
use crate::shared::utils::LogContext;

/// Catalog reads over the document store
///
/// Two paths produce the same page shape:
/// - structured: server-side count, then an offset/limit equality query;
/// - fallback: one bounded unfiltered scan, matched and sliced in memory.
///
/// Any structured failure drops to the fallback once, including a page
/// holding a document that does not decode. A failed fallback scan yields
/// an empty page. Neither is retried.
pub struct DocumentCatalogRepository {
    store: Arc<dyn DocumentStore>,
    config: SearchConfig,
}

impl DocumentCatalogRepository {
    pub fn new(store: Arc<dyn DocumentStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    async fn structured_search(
        &self,
        category: Category,
        query: &StructuredQuery,
        pagination: &PaginationParams,
    ) -> StoreResult<PaginatedResult<TravelItem>> {
        LogContext::store_operation("count", &query.collection, None);
        let total = self.store.count(&query.without_paging()).await?;

        if total <= pagination.offset() as u64 {
            return Ok(PaginatedResult::new(Vec::new(), total, pagination));
        }

        LogContext::store_operation("query", &query.collection, None);
        let documents = self.store.run_query(query).await?;
        // Undecodable rows are still in the count; leave the total to the scan
        let mut items = TravelItemMapper::to_domain_all(category, &documents).map_err(|e| {
            StoreError::InvalidResponse {
                message: format!("malformed {} document in structured page: {}", category, e),
            }
        })?;
        items.truncate(pagination.limit());

        // Count and fetch are separate reads; never report fewer than we return
        let total = total.max((pagination.offset() + items.len()) as u64);
        Ok(PaginatedResult::new(items, total, pagination))
    }

    async fn fallback_search(
        &self,
        category: Category,
        filters: &SearchFilters,
        pagination: &PaginationParams,
    ) -> SearchOutcome {
        let ceiling = self.config.fallback_scan_limit;
        let scan = StructuredQuery::collection(category.collection_name()).limit(ceiling);

        LogContext::store_operation("scan", category.collection_name(), None);
        let documents = match self.store.run_query(&scan).await {
            Ok(documents) => documents,
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("Fallback scan of {} failed, returning no results", category),
                );
                return SearchOutcome::new(PaginatedResult::empty(pagination), QueryPath::Unavailable);
            }
        };

        if documents.len() >= ceiling {
            log::warn!(
                "Fallback scan of {} hit the {} document ceiling; results may be incomplete",
                category,
                ceiling
            );
        }

        let matcher = filters.matcher();
        let candidates: Vec<TravelItem> = TravelItemMapper::to_domain_batch(category, documents)
            .into_iter()
            .filter(|item| matcher.matches(item))
            .collect();

        SearchOutcome::new(
            PaginatedResult::from_candidates(candidates, pagination),
            QueryPath::Fallback,
        )
    }
}

#[async_trait]
impl CatalogRepository for DocumentCatalogRepository {
    async fn search(
        &self,
        category: Category,
        filters: &SearchFilters,
        pagination: PaginationParams,
    ) -> SearchOutcome {
        match QueryPlanner::plan(category, filters, &pagination) {
            QueryPlan::Structured(query) => {
                match self.structured_search(category, &query, &pagination).await {
                    Ok(page) => SearchOutcome::new(page, QueryPath::Structured),
                    Err(e) => {
                        let stage = if e.is_query_rejection() {
                            "structured query (rejected shape)"
                        } else {
                            "structured query"
                        };
                        LogContext::search_degraded(category.collection_name(), stage, &e);
                        self.fallback_search(category, filters, &pagination).await
                    }
                }
            }
            QueryPlan::Fallback(reason) => {
                log::debug!("Search {} routed to fallback: {}", category, reason);
                self.fallback_search(category, filters, &pagination).await
            }
        }
    }

    async fn find_by_id(&self, category: Category, id: &str) -> AppResult<Option<TravelItem>> {
        let document = self.store.get(category.collection_name(), id).await?;
        match document {
            Some(doc) => Ok(Some(TravelItemMapper::to_domain(category, &doc)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::RawSearchFilters;
    use crate::modules::store::domain::{Document, MockDocumentStore};
    use serde_json::json;

    fn cab(id: &str, title: &str, details: &[&str]) -> Document {
        Document::new(
            id,
            json!({
                "type": "cab",
                "title": title,
                "subtitle": "City ride",
                "price": 800.0,
                "rating": 4.2,
                "details": details,
            })
            .as_object()
            .cloned()
            .unwrap(),
        )
    }

    fn config(fallback_scan_limit: usize) -> SearchConfig {
        SearchConfig {
            fallback_scan_limit,
            ..SearchConfig::default()
        }
    }

    #[tokio::test]
    async fn count_rejection_falls_back_to_scan() {
        let mut store = MockDocumentStore::new();
        store.expect_count().times(1).returning(|_| {
            Err(StoreError::QueryRejected {
                reason: "missing index".to_string(),
            })
        });
        store
            .expect_run_query()
            .withf(|q| q.is_unfiltered() && q.limit == Some(1000))
            .times(1)
            .returning(|_| Ok(vec![cab("c-1", "Swift Dzire", &[]), cab("c-2", "Innova", &[])]));

        let repository = DocumentCatalogRepository::new(Arc::new(store), config(1000));
        let outcome = repository
            .search(Category::Cabs, &SearchFilters::default(), PaginationParams::new(1, 10))
            .await;

        assert_eq!(outcome.path, QueryPath::Fallback);
        assert_eq!(outcome.page.total, 2);
    }

    #[tokio::test]
    async fn car_filter_never_touches_structured_path() {
        let mut store = MockDocumentStore::new();
        store.expect_count().never();
        store.expect_run_query().times(1).returning(|_| {
            Ok(vec![
                cab("c-1", "Sedan", &["Maruti Swift", "AC"]),
                cab("c-2", "Toyota Innova", &["SUV"]),
            ])
        });

        let repository = DocumentCatalogRepository::new(Arc::new(store), config(1000));
        let filters = SearchFilters::normalize(&RawSearchFilters::new().with_car("SWIFT"));
        let outcome = repository
            .search(Category::Cabs, &filters, PaginationParams::default())
            .await;

        assert_eq!(outcome.path, QueryPath::Fallback);
        assert_eq!(outcome.page.data.len(), 1);
        assert_eq!(outcome.page.data[0].id, "c-1");
    }

    #[tokio::test]
    async fn unreachable_store_yields_empty_page() {
        let mut store = MockDocumentStore::new();
        store.expect_count().returning(|_| {
            Err(StoreError::Unavailable {
                message: "connection refused".to_string(),
            })
        });
        store.expect_run_query().returning(|_| {
            Err(StoreError::Unavailable {
                message: "connection refused".to_string(),
            })
        });

        let repository = DocumentCatalogRepository::new(Arc::new(store), config(1000));
        let outcome = repository
            .search(Category::Flights, &SearchFilters::default(), PaginationParams::default())
            .await;

        assert_eq!(outcome.path, QueryPath::Unavailable);
        assert!(outcome.page.data.is_empty());
        assert_eq!(outcome.page.total, 0);
    }

    #[tokio::test]
    async fn malformed_structured_row_defers_total_to_scan() {
        fn rows() -> Vec<Document> {
            vec![
                cab("c-1", "Swift Dzire", &[]),
                Document::new("c-2", json!({ "title": "No price" }).as_object().cloned().unwrap()),
                cab("c-3", "Innova", &[]),
            ]
        }

        let mut store = MockDocumentStore::new();
        store.expect_count().times(1).returning(|_| Ok(3));
        store
            .expect_run_query()
            .withf(|q| q.limit == Some(10))
            .times(1)
            .returning(|_| Ok(rows()));
        store
            .expect_run_query()
            .withf(|q| q.limit == Some(1000))
            .times(1)
            .returning(|_| Ok(rows()));

        let repository = DocumentCatalogRepository::new(Arc::new(store), config(1000));
        let outcome = repository
            .search(Category::Cabs, &SearchFilters::default(), PaginationParams::default())
            .await;

        assert_eq!(outcome.path, QueryPath::Fallback);
        assert_eq!(outcome.page.total, 2);
        assert_eq!(outcome.page.data.len(), 2);
    }

    #[tokio::test]
    async fn structured_page_past_the_end_skips_fetch() {
        let mut store = MockDocumentStore::new();
        store.expect_count().returning(|_| Ok(5));
        store.expect_run_query().never();

        let repository = DocumentCatalogRepository::new(Arc::new(store), config(1000));
        let outcome = repository
            .search(Category::Trains, &SearchFilters::default(), PaginationParams::new(2, 10))
            .await;

        assert_eq!(outcome.path, QueryPath::Structured);
        assert!(outcome.page.data.is_empty());
        assert_eq!(outcome.page.total, 5);
    }

    #[tokio::test]
    async fn fallback_scan_uses_configured_ceiling() {
        let mut store = MockDocumentStore::new();
        store
            .expect_run_query()
            .withf(|q| q.limit == Some(2))
            .times(1)
            .returning(|_| Ok(vec![cab("c-1", "Swift", &[]), cab("c-2", "Swift", &[])]));

        let repository = DocumentCatalogRepository::new(Arc::new(store), config(2));
        let filters = SearchFilters::normalize(&RawSearchFilters::new().with_car("swift"));
        let outcome = repository
            .search(Category::Cabs, &filters, PaginationParams::default())
            .await;

        assert_eq!(outcome.page.total, 2);
    }

    #[tokio::test]
    async fn find_by_id_decodes_document() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .withf(|collection, id| collection == "cabs" && id == "c-9")
            .returning(|_, _| Ok(Some(cab("c-9", "Ertiga", &["6 seats"]))));

        let repository = DocumentCatalogRepository::new(Arc::new(store), config(1000));
        let item = repository.find_by_id(Category::Cabs, "c-9").await.unwrap();
        assert_eq!(item.map(|i| i.title), Some("Ertiga".to_string()));
    }
}
