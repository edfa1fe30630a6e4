use crate::modules::catalog::application::ports::SearchOutcome;

/// Result of a category search (page plus serving path)
pub type SearchCategoryResult = SearchOutcome;
