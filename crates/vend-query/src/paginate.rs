//! Offset pagination (page number / page size).

use serde::{Deserialize, Serialize};
use vend_core::Product;

/// Pagination metadata for an offset-paginated page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed, clamped into range).
    pub page: i64,
    /// Items per page.
    pub page_size: i64,
    /// Total items in the filtered set.
    pub total: i64,
    /// Total number of pages (`ceil(total / page_size)`).
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

/// One page of products plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult {
    /// The items on this page. Never longer than `pagination.page_size`.
    pub items: Vec<Product>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

/// Slice one page out of a filtered, sorted sequence.
///
/// The requested page is clamped to `[1, total_pages]` (or 1 when the
/// sequence is empty) before slicing, so an out-of-range page returns the
/// nearest valid page rather than an error. `page_size` is assumed positive;
/// the fetch boundary rejects non-positive sizes before they get here.
pub fn paginate(items: &[Product], page: i64, page_size: i64) -> PageResult {
    debug_assert!(page_size > 0, "page_size validated at the fetch boundary");

    let total = items.len() as i64;
    // Ceiling division without the additive trick, which would overflow for
    // page sizes near i64::MAX.
    let total_pages = if total == 0 {
        0
    } else {
        (total - 1) / page_size + 1
    };

    let page = page.clamp(1, total_pages.max(1));
    let start = ((page - 1) * page_size) as usize;
    let end = (start + page_size as usize).min(items.len());
    let page_items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageResult {
        items: page_items,
        pagination: Pagination {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}
