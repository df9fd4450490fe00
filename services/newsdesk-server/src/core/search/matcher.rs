//! Per-domain category rules.
//!
//! Articles and external links carry different category fields and
//! different extra scoring signals. A [`CategoryMatcher`] bundles
//! both so the scorer and the filter never branch on the domain.

use super::scorer::weights;
use crate::core::types::{Document, DocumentKind, SearchDomain};

/// Domain-specific scoring signals and category filter predicate.
///
/// `needle` arguments are already trimmed and lowercased.
pub trait CategoryMatcher: Send + Sync {
    /// Score contributed by fields other than title and author
    fn signal_score(&self, doc: &Document, needle: &str) -> u32;

    /// Whether `doc` passes a category filter
    fn matches_category(&self, doc: &Document, needle: &str) -> bool;
}

/// Case-insensitive containment; empty needles never match
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(needle)
}

/// Rules for the `articles` domain (articles and opinion pieces)
pub struct EditorialMatcher;

impl CategoryMatcher for EditorialMatcher {
    fn signal_score(&self, doc: &Document, needle: &str) -> u32 {
        let Some(editorial) = doc.editorial() else {
            return 0;
        };

        let mut score = 0;
        if contains_ci(&editorial.primary_category, needle) {
            score += weights::EDITORIAL_CATEGORY;
        }
        if contains_ci(&editorial.secondary_category, needle) {
            score += weights::EDITORIAL_CATEGORY;
        }
        if editorial.tags.iter().any(|tag| contains_ci(tag, needle)) {
            score += weights::TAG;
        }
        if contains_ci(&doc.quote, needle) {
            score += weights::EDITORIAL_QUOTE;
        }
        score
    }

    fn matches_category(&self, doc: &Document, needle: &str) -> bool {
        if doc.kind() == DocumentKind::Opinion {
            return needle == "opinion";
        }

        doc.editorial().is_some_and(|e| {
            contains_ci(&e.primary_category, needle) || contains_ci(&e.secondary_category, needle)
        })
    }
}

/// Rules for the `external` domain
pub struct ExternalMatcher;

impl CategoryMatcher for ExternalMatcher {
    fn signal_score(&self, doc: &Document, needle: &str) -> u32 {
        let mut score = 0;
        if doc
            .external()
            .is_some_and(|link| contains_ci(&link.category, needle))
        {
            score += weights::EXTERNAL_CATEGORY;
        }
        if contains_ci(&doc.quote, needle) {
            score += weights::EXTERNAL_QUOTE;
        }
        score
    }

    fn matches_category(&self, doc: &Document, needle: &str) -> bool {
        doc.external()
            .is_some_and(|link| contains_ci(&link.category, needle))
    }
}

/// Matcher for a domain
pub fn matcher_for(domain: SearchDomain) -> &'static dyn CategoryMatcher {
    match domain {
        SearchDomain::Articles => &EditorialMatcher,
        SearchDomain::External => &ExternalMatcher,
    }
}
