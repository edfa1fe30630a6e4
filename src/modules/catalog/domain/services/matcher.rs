use crate::modules::catalog::domain::{entities::TravelItem, value_objects::SearchFilters};

/// Predicate over a single item
///
/// Each filter treats several fields as alternative evidence for the same
/// fact ("is this hotel in Mumbai"), so a matcher ORs across fields while
/// the composite ANDs across filters. All comparisons are lower-cased.
pub trait ItemMatcher: Send + Sync {
    fn matches(&self, item: &TravelItem) -> bool;
    fn name(&self) -> &'static str;
}

fn lower(value: &str) -> String {
    value.to_lowercase()
}

fn subtitle_segment_equals(item: &TravelItem, needle: &str) -> bool {
    item.subtitle_location()
        .map(|segment| lower(segment) == needle)
        .unwrap_or(false)
}

/// Origin: `from` equals, or title/subtitle mention it, or the subtitle's
/// leading segment is it
#[derive(Debug, Clone)]
pub struct FromMatcher {
    needle: String,
}

impl FromMatcher {
    pub fn new(location: &str) -> Self {
        Self {
            needle: lower(location),
        }
    }
}

impl ItemMatcher for FromMatcher {
    fn matches(&self, item: &TravelItem) -> bool {
        item.from
            .as_deref()
            .map(|from| lower(from) == self.needle)
            .unwrap_or(false)
            || lower(&item.title).contains(&self.needle)
            || lower(&item.subtitle).contains(&self.needle)
            || subtitle_segment_equals(item, &self.needle)
    }

    fn name(&self) -> &'static str {
        "From"
    }
}

/// Destination: `to` equals, or subtitle mentions it, or the subtitle's
/// leading segment is it. Titles are not consulted.
#[derive(Debug, Clone)]
pub struct ToMatcher {
    needle: String,
}

impl ToMatcher {
    pub fn new(location: &str) -> Self {
        Self {
            needle: lower(location),
        }
    }
}

impl ItemMatcher for ToMatcher {
    fn matches(&self, item: &TravelItem) -> bool {
        item.to
            .as_deref()
            .map(|to| lower(to) == self.needle)
            .unwrap_or(false)
            || lower(&item.subtitle).contains(&self.needle)
            || subtitle_segment_equals(item, &self.needle)
    }

    fn name(&self) -> &'static str {
        "To"
    }
}

/// Vehicle model: substring of title, joined details, or subtitle
#[derive(Debug, Clone)]
pub struct CarMatcher {
    term: String,
}

impl CarMatcher {
    pub fn new(term: &str) -> Self {
        Self { term: lower(term) }
    }
}

impl ItemMatcher for CarMatcher {
    fn matches(&self, item: &TravelItem) -> bool {
        lower(&item.title).contains(&self.term)
            || lower(&item.details_text()).contains(&self.term)
            || lower(&item.subtitle).contains(&self.term)
    }

    fn name(&self) -> &'static str {
        "Car"
    }
}

/// AND-composition; an empty composite accepts everything
#[derive(Default)]
pub struct AllOf {
    matchers: Vec<Box<dyn ItemMatcher>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, matcher: impl ItemMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }
}

impl ItemMatcher for AllOf {
    fn matches(&self, item: &TravelItem) -> bool {
        self.matchers.iter().all(|m| m.matches(item))
    }

    fn name(&self) -> &'static str {
        "AllOf"
    }
}

impl SearchFilters {
    /// In-memory predicate for this filter set
    pub fn matcher(&self) -> AllOf {
        let mut matcher = AllOf::new();
        if let Some(from) = self.origin() {
            matcher = matcher.with(FromMatcher::new(from));
        }
        if let Some(to) = self.destination() {
            matcher = matcher.with(ToMatcher::new(to));
        }
        if let Some(car) = self.car_term() {
            matcher = matcher.with(CarMatcher::new(car));
        }
        matcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::value_objects::{ItemType, RawSearchFilters};

    fn item(title: &str, subtitle: &str, from: Option<&str>, to: Option<&str>) -> TravelItem {
        TravelItem {
            id: "i-1".to_string(),
            item_type: ItemType::Flight,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            price: 1000.0,
            rating: 4.0,
            details: vec!["Economy".to_string(), "Non-stop".to_string()],
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            image: None,
        }
    }

    fn filters(raw: RawSearchFilters) -> SearchFilters {
        SearchFilters::normalize(&raw)
    }

    #[test]
    fn to_matches_subtitle_alias_when_field_is_empty() {
        let hotel = item("Sea Breeze Resort", "Goa, India • Beachfront", None, None);
        let matcher = filters(RawSearchFilters::new().with_to("goa")).matcher();
        assert!(matcher.matches(&hotel));
    }

    #[test]
    fn to_ignores_title() {
        let flight = item("Goa Express", "Daily service", Some("Mumbai"), Some("Pune"));
        assert!(!ToMatcher::new("Goa").matches(&flight));
        assert!(FromMatcher::new("Goa").matches(&flight));
    }

    #[test]
    fn field_equality_is_case_insensitive() {
        let flight = item("IndiGo 6E-201", "Non-stop", Some("MUMBAI"), Some("goa"));
        assert!(FromMatcher::new("Mumbai").matches(&flight));
        assert!(ToMatcher::new("Goa").matches(&flight));
    }

    #[test]
    fn car_searches_title_details_and_subtitle() {
        let mut cab = item("Sedan ride", "Comfort class", None, None);
        cab.details = vec!["Maruti Swift Dzire".to_string(), "AC".to_string()];
        assert!(CarMatcher::new("swift").matches(&cab));
        assert!(CarMatcher::new("dzire ac").matches(&cab));
        assert!(!CarMatcher::new("innova").matches(&cab));
    }

    #[test]
    fn filters_are_and_combined() {
        let flight = item("Air India AI-101", "Mumbai, India", Some("Mumbai"), Some("Delhi"));
        let both = filters(RawSearchFilters::new().with_from("mumbai").with_to("goa")).matcher();
        assert_eq!(both.names(), vec!["From", "To"]);
        assert!(!both.matches(&flight));

        let matching = filters(RawSearchFilters::new().with_from("mumbai").with_to("delhi")).matcher();
        assert!(matching.matches(&flight));
    }

    #[test]
    fn empty_filters_accept_everything() {
        let matcher = SearchFilters::default().matcher();
        assert!(matcher.is_empty());
        assert!(matcher.matches(&item("Anything", "", None, None)));
    }
}
