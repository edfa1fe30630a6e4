use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::ports::CatalogRepository;
use crate::modules::catalog::domain::SearchFilters;
use crate::shared::utils::{LogContext, TimedOperation};
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::{query::SearchCategoryQuery, result::SearchCategoryResult};

/// Query handler for category listings
///
/// Normalizes the raw filters and clamps paging before delegating, so the
/// repository only ever sees canonical input.
pub struct SearchCategoryHandler {
    catalog_repository: Arc<dyn CatalogRepository>,
    max_page_size: u32,
}

impl SearchCategoryHandler {
    pub fn new(catalog_repository: Arc<dyn CatalogRepository>, max_page_size: u32) -> Self {
        Self {
            catalog_repository,
            max_page_size,
        }
    }
}

#[async_trait]
impl Query<SearchCategoryQuery, SearchCategoryResult> for SearchCategoryHandler {
    async fn execute(&self, query: SearchCategoryQuery) -> AppResult<SearchCategoryResult> {
        let filters = SearchFilters::normalize(&query.filters);
        let pagination = query.pagination.clamped(self.max_page_size);
        let category = query.category.collection_name();

        LogContext::search_operation(category, None, None);
        let timer = TimedOperation::new(&format!("search {}", category));

        let outcome = self
            .catalog_repository
            .search(query.category, &filters, pagination)
            .await;

        timer.finish_with_info(&outcome.path.to_string());
        LogContext::search_operation(
            category,
            Some(&outcome.path.to_string()),
            Some((outcome.page.data.len(), outcome.page.total)),
        );

        Ok(outcome)
    }
}
