use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::modules::catalog::domain::{Category, SearchFilters, TravelItem};
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::AppResult,
};

/// Which path produced a search page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryPath {
    Structured,
    Fallback,
    /// Store unreachable on the fallback scan; the page is empty
    Unavailable,
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryPath::Structured => write!(f, "structured"),
            QueryPath::Fallback => write!(f, "fallback"),
            QueryPath::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// A page of items plus the path that served it. Callers that only need
/// `{data, total}` read `page`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    #[serde(flatten)]
    pub page: PaginatedResult<TravelItem>,
    pub path: QueryPath,
}

impl SearchOutcome {
    pub fn new(page: PaginatedResult<TravelItem>, path: QueryPath) -> Self {
        Self { page, path }
    }
}

/// Port (interface) for catalog reads
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Filtered, paginated category listing.
    ///
    /// Infallible by contract: store failures degrade to the fallback path
    /// or to an empty page, and are logged rather than returned.
    async fn search(
        &self,
        category: Category,
        filters: &SearchFilters,
        pagination: PaginationParams,
    ) -> SearchOutcome;

    /// Fetch a single item for the details and checkout views
    async fn find_by_id(&self, category: Category, id: &str) -> AppResult<Option<TravelItem>>;
}
