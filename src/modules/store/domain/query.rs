use serde_json::Value;

use super::document::Document;

/// Comparison supported by the store's native query language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    Equal,
    ArrayContains,
}

/// A single `field <op> value` constraint
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl FieldFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Equal,
            value: value.into(),
        }
    }

    pub fn array_contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::ArrayContains,
            value: value.into(),
        }
    }

    /// Exact store semantics: case-sensitive equality, no aliasing
    pub fn matches(&self, document: &Document) -> bool {
        match (self.op, document.get(&self.field)) {
            (FilterOp::Equal, Some(value)) => value == &self.value,
            (FilterOp::ArrayContains, Some(Value::Array(values))) => values.contains(&self.value),
            _ => false,
        }
    }
}

/// Collection-scoped, AND-combined, paginated query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredQuery {
    pub collection: String,
    pub filters: Vec<FieldFilter>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl StructuredQuery {
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            ..Default::default()
        }
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn where_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(FieldFilter::eq(field, value))
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Same constraints without paging, for count aggregation
    pub fn without_paging(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            filters: self.filters.clone(),
            offset: 0,
            limit: None,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.filters.is_empty()
    }

    /// Distinct filtered field names, sorted (the shape of index a store would need)
    pub fn filtered_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self.filters.iter().map(|f| f.field.clone()).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.filters.iter().all(|f| f.matches(document))
    }
}
