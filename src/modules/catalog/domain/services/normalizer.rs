//! Canonical forms for free-text search input
//!
//! Both functions are pure and idempotent, and return `None` for absent,
//! empty or whitespace-only input so "no filter" has a single representation.

/// Title-cased location: `"  new DELHI "` becomes `"New Delhi"`
pub fn normalize_location(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(
        trimmed
            .to_lowercase()
            .split_whitespace()
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Case-folded search term for substring matching: trimmed and lower-cased only
pub fn normalize_term(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Upper-case the first character of an already lower-cased word.
/// Characters whose upper-case form expands (`ß` to `SS`) are left alone so
/// the result lower-cases back to the same word.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    std::iter::once(head).chain(chars).collect()
}
