use crate::modules::catalog::domain::Category;

/// Query for a single item's details
#[derive(Debug, Clone)]
pub struct GetItemDetailsQuery {
    pub category: Category,
    pub item_id: String,
}

impl GetItemDetailsQuery {
    pub fn new(category: Category, item_id: impl Into<String>) -> Self {
        Self {
            category,
            item_id: item_id.into(),
        }
    }
}
