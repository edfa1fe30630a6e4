use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

use super::ports::{CatalogRepository, QueryPath, SearchOutcome};
use super::use_cases::{
    GetItemDetailsHandler, GetItemDetailsQuery, SearchCategoryHandler, SearchCategoryQuery,
};
use crate::modules::catalog::domain::{Category, RawSearchFilters, TravelItem};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::application::use_case::Query;
use crate::shared::config::SearchConfig;
use crate::shared::errors::AppResult;

/// Featured listing for one category on the home page
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedCategory {
    pub category: Category,
    pub items: Vec<TravelItem>,
    pub total: u64,
}

/// Catalog facade used by the presentation layer
pub struct CatalogService {
    search_handler: SearchCategoryHandler,
    details_handler: GetItemDetailsHandler,
    default_page_size: u32,
}

impl CatalogService {
    pub fn new(catalog_repository: Arc<dyn CatalogRepository>, config: &SearchConfig) -> Self {
        Self {
            search_handler: SearchCategoryHandler::new(
                Arc::clone(&catalog_repository),
                config.max_page_size,
            ),
            details_handler: GetItemDetailsHandler::new(catalog_repository),
            default_page_size: config.default_page_size,
        }
    }

    /// One page of a category, filtered. `page`/`limit` default to 1 and the
    /// configured page size.
    pub async fn search(
        &self,
        category: Category,
        page: Option<u32>,
        limit: Option<u32>,
        filters: RawSearchFilters,
    ) -> AppResult<SearchOutcome> {
        let pagination = PaginationParams::new(
            page.unwrap_or(1),
            limit.unwrap_or(self.default_page_size),
        );
        self.search_handler
            .execute(SearchCategoryQuery::new(category, pagination).with_filters(filters))
            .await
    }

    /// Same as `search`, resolving the category from its name first.
    /// Unknown names are a `ValidationError`.
    pub async fn search_by_name(
        &self,
        category: &str,
        page: Option<u32>,
        limit: Option<u32>,
        filters: RawSearchFilters,
    ) -> AppResult<SearchOutcome> {
        let category: Category = category.parse()?;
        self.search(category, page, limit, filters).await
    }

    pub async fn get_item(&self, category: Category, item_id: &str) -> AppResult<TravelItem> {
        self.details_handler
            .execute(GetItemDetailsQuery::new(category, item_id))
            .await
    }

    /// First page of several categories, fetched concurrently.
    ///
    /// Each category is an independent read. A category whose store read
    /// fails comes back as the repository's empty `Unavailable` page and
    /// never holds up the others.
    pub async fn featured(&self, categories: &[Category], per_category: u32) -> Vec<FeaturedCategory> {
        let searches = categories.iter().map(|&category| async move {
            let outcome = self
                .search(category, Some(1), Some(per_category), RawSearchFilters::default())
                .await
                // Store failures arrive as an Unavailable page, not as Err
                .unwrap_or_else(|e| {
                    debug!("Featured {} rejected: {}", category, e);
                    SearchOutcome::new(
                        PaginatedResult::empty(&PaginationParams::new(1, per_category)),
                        QueryPath::Unavailable,
                    )
                });

            if outcome.path == QueryPath::Unavailable {
                debug!("Featured {} unavailable, showing it empty", category);
            }

            FeaturedCategory {
                category,
                total: outcome.page.total,
                items: outcome.page.data,
            }
        });

        let featured = join_all(searches).await;
        info!(
            "Featured listing assembled for {} categories ({} items)",
            featured.len(),
            featured.iter().map(|f| f.items.len()).sum::<usize>()
        );
        featured
    }
}
