use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::services::normalizer::{normalize_location, normalize_term};
use crate::modules::store::domain::FieldFilter;

/// Filter input exactly as the caller typed it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSearchFilters {
    pub from: Option<String>,
    pub to: Option<String>,
    pub car: Option<String>,
}

impl RawSearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_car(mut self, car: impl Into<String>) -> Self {
        self.car = Some(car.into());
        self
    }
}

/// Normalized filter set; only constructible through normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    from: Option<String>,
    to: Option<String>,
    car: Option<String>,
}

impl SearchFilters {
    pub fn normalize(raw: &RawSearchFilters) -> Self {
        Self {
            from: normalize_location(raw.from.as_deref()),
            to: normalize_location(raw.to.as_deref()),
            car: normalize_term(raw.car.as_deref()),
        }
    }

    /// Title-cased origin, e.g. `"Mumbai"`
    pub fn origin(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// Title-cased destination, e.g. `"Goa"`
    pub fn destination(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Lower-cased vehicle term, e.g. `"swift"`
    pub fn car_term(&self) -> Option<&str> {
        self.car.as_deref()
    }

    pub fn has_location(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_location() && self.car.is_none()
    }

    /// Exact-match constraints the store can evaluate natively
    pub fn equality_constraints(&self) -> Vec<FieldFilter> {
        let mut constraints = Vec::new();
        if let Some(from) = &self.from {
            constraints.push(FieldFilter::eq("from", from.as_str()));
        }
        if let Some(to) = &self.to {
            constraints.push(FieldFilter::eq("to", to.as_str()));
        }
        constraints
    }
}
