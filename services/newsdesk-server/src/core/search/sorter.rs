//! Result ordering.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::core::types::{ScoredDocument, SortBy};

/// Sort results in place. The sort is stable.
///
/// Missing dates order as the epoch; missing authors as the empty
/// string.
pub fn sort_results(results: &mut [ScoredDocument], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| date_key(b).cmp(&date_key(a)))
        }),
        SortBy::DateDesc => results.sort_by_key(|r| std::cmp::Reverse(date_key(r))),
        SortBy::DateAsc => results.sort_by_key(date_key),
        SortBy::AuthorAsc => {
            results.sort_by(|a, b| compare_authors(&a.document.author, &b.document.author))
        }
    }
}

fn date_key(result: &ScoredDocument) -> i64 {
    result.document.timestamp_millis()
}

/// Compare on the folded key, falling back to code point order so the
/// result is total
fn compare_authors(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// NFD-decompose, drop combining marks, lowercase.
///
/// "Émile" and "emile" share a key, so accented names sort among their
/// unaccented neighbours.
fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
