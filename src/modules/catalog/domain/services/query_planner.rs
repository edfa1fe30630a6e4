use std::fmt;

use crate::modules::catalog::domain::value_objects::{Category, SearchFilters};
use crate::modules::store::domain::StructuredQuery;
use crate::shared::application::PaginationParams;

/// Why a search skips the structured path entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Car model is matched as a substring of title/details/subtitle
    SubstringTerm,
    /// Hotel location lives in free text (subtitle), not only in `to`
    LocationInFreeText,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FallbackReason::SubstringTerm => write!(f, "substring term filter"),
            FallbackReason::LocationInFreeText => write!(f, "location held in free text"),
        }
    }
}

/// How a category search will be served
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan {
    /// Store-native equality query, paginated server-side
    Structured(StructuredQuery),
    /// Bounded scan plus in-memory matching
    Fallback(FallbackReason),
}

pub struct QueryPlanner;

impl QueryPlanner {
    /// Pick the path for a search. Combinations that pure equality cannot
    /// answer without false negatives go straight to the fallback.
    pub fn plan(
        category: Category,
        filters: &SearchFilters,
        pagination: &PaginationParams,
    ) -> QueryPlan {
        if filters.car_term().is_some() {
            return QueryPlan::Fallback(FallbackReason::SubstringTerm);
        }

        if category == Category::Hotels && filters.has_location() {
            return QueryPlan::Fallback(FallbackReason::LocationInFreeText);
        }

        let query = filters
            .equality_constraints()
            .into_iter()
            .fold(
                StructuredQuery::collection(category.collection_name()),
                StructuredQuery::filter,
            )
            .offset(pagination.offset())
            .limit(pagination.limit());

        QueryPlan::Structured(query)
    }
}
