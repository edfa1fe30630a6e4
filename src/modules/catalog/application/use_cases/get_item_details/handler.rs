use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::ports::CatalogRepository;
use crate::modules::catalog::domain::TravelItem;
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetItemDetailsQuery;

/// Query handler for the item details view
pub struct GetItemDetailsHandler {
    catalog_repository: Arc<dyn CatalogRepository>,
}

impl GetItemDetailsHandler {
    pub fn new(catalog_repository: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog_repository }
    }
}

#[async_trait]
impl Query<GetItemDetailsQuery, TravelItem> for GetItemDetailsHandler {
    async fn execute(&self, query: GetItemDetailsQuery) -> AppResult<TravelItem> {
        let item_id = query.item_id.trim();
        if item_id.is_empty() {
            return Err(AppError::ValidationError(
                "Item id cannot be empty".to_string(),
            ));
        }

        self.catalog_repository
            .find_by_id(query.category, item_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No {} with id {}", query.category.item_type(), item_id))
            })
    }
}
