//! Page slicing and metadata.

use crate::core::types::Pagination;

/// Number of pages for `total` items, never less than 1
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slice one page out of `items`.
///
/// `page` is 1-based. Pages past the end yield an empty slice with
/// valid metadata.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> (Vec<T>, Pagination) {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = items.len();

    let start = (page - 1).saturating_mul(page_size);
    let slice = items.into_iter().skip(start).take(page_size).collect();

    (
        slice,
        Pagination {
            page,
            page_size,
            total,
            total_pages: total_pages(total, page_size),
        },
    )
}
