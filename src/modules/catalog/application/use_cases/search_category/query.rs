use crate::modules::catalog::domain::{Category, RawSearchFilters};
use crate::shared::application::pagination::PaginationParams;

/// Query for one page of a category listing
#[derive(Debug, Clone)]
pub struct SearchCategoryQuery {
    pub category: Category,
    pub pagination: PaginationParams,
    pub filters: RawSearchFilters,
}

impl SearchCategoryQuery {
    pub fn new(category: Category, pagination: PaginationParams) -> Self {
        Self {
            category,
            pagination,
            filters: RawSearchFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: RawSearchFilters) -> Self {
        self.filters = filters;
        self
    }
}
