//! Lexical relevance scoring.
//!
//! Scores are additive integers: every candidate starts at
//! [`weights::BASE`] and gains a fixed weight for each field that
//! contains the query (case-insensitive substring). No normalization,
//! no recency decay.

use super::matcher::{contains_ci, matcher_for, CategoryMatcher};
use crate::core::types::Document;

/// Relevance weights. These are product-tuned values; keep them in
/// sync with the site's existing ranking.
pub mod weights {
    pub const BASE: u32 = 1;
    pub const TITLE: u32 = 10;
    pub const AUTHOR: u32 = 5;
    pub const EDITORIAL_CATEGORY: u32 = 4;
    pub const TAG: u32 = 7;
    pub const EDITORIAL_QUOTE: u32 = 3;
    pub const EXTERNAL_CATEGORY: u32 = 3;
    pub const EXTERNAL_QUOTE: u32 = 2;
}

/// Score `doc` against a raw query string.
///
/// The query is trimmed and lowercased, and the matcher of the
/// document's own domain is used.
pub fn score(doc: &Document, query: &str) -> u32 {
    let needle = query.trim().to_lowercase();
    score_with(matcher_for(doc.domain()), doc, &needle)
}

/// Score `doc` with an explicit matcher and a prepared needle
/// (trimmed, lowercased)
pub fn score_with(matcher: &dyn CategoryMatcher, doc: &Document, needle: &str) -> u32 {
    let mut total = weights::BASE;
    if contains_ci(&doc.title, needle) {
        total += weights::TITLE;
    }
    if contains_ci(&doc.author, needle) {
        total += weights::AUTHOR;
    }
    total + matcher.signal_score(doc, needle)
}
