//! Structured result filters.
//!
//! All provided filters must hold (logical AND). Absent filters pass
//! everything through.

use super::matcher::{contains_ci, CategoryMatcher};
use crate::core::types::{Document, ScoredDocument, SearchFilters};

/// Whether `doc` satisfies every filter in `filters`.
///
/// Documents without a date fail any date bound.
pub fn matches_filters(
    doc: &Document,
    filters: &SearchFilters,
    matcher: &dyn CategoryMatcher,
) -> bool {
    if let Some(from) = filters.date_from {
        if doc.date.map_or(true, |date| date < from) {
            return false;
        }
    }
    if let Some(to) = filters.date_to {
        if doc.date.map_or(true, |date| date > to) {
            return false;
        }
    }

    if let Some(author) = normalized(filters.author.as_deref()) {
        if !contains_ci(&doc.author, &author) {
            return false;
        }
    }

    if let Some(category) = normalized(filters.category.as_deref()) {
        if !matcher.matches_category(doc, &category) {
            return false;
        }
    }

    true
}

/// Keep the results that satisfy `filters`, preserving order
pub fn apply_filters(
    results: Vec<ScoredDocument>,
    filters: &SearchFilters,
    matcher: &dyn CategoryMatcher,
) -> Vec<ScoredDocument> {
    results
        .into_iter()
        .filter(|r| matches_filters(&r.document, filters, matcher))
        .collect()
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}
