use crate::shared::errors::AppResult;
/// Base trait for query handlers
///
/// Handlers own their collaborators as `Arc<dyn Port>` and expose a single
/// async entry point.
///
/// # Example
///
/// ```ignore
/// struct GetItemQuery {
///     category: Category,
///     id: String,
/// }
///
/// struct GetItemHandler {
///     repository: Arc<dyn CatalogRepository>,
/// }
///
/// #[async_trait]
/// impl Query<GetItemQuery, TravelItem> for GetItemHandler {
///     async fn execute(&self, query: GetItemQuery) -> AppResult<TravelItem> {
///         // Query logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
