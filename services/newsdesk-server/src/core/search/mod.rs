//! Relevance search over content store candidates.
//!
//! The pipeline runs per request: fetch candidates, score each
//! against the query, filter, sort, paginate. Domain-specific rules
//! (category signals and the category filter) live in a
//! [`CategoryMatcher`] chosen once per request.

mod engine;
mod filter;
mod matcher;
mod paginator;
mod scorer;
mod sorter;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::{rank, SearchService};
pub use filter::{apply_filters, matches_filters};
pub use matcher::{matcher_for, CategoryMatcher, EditorialMatcher, ExternalMatcher};
pub use paginator::{paginate, total_pages};
pub use scorer::{score, score_with, weights};
pub use sorter::sort_results;
