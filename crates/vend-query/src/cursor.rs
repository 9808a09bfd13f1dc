//! Cursor pagination (resumable iteration by last-seen id).

use serde::{Deserialize, Serialize};
use vend_core::{Product, ProductId};

/// One slice of a cursor-paginated scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CursorPage {
    /// The items in this slice.
    pub items: Vec<Product>,
    /// Cursor for the next call; `None` means the scan is complete.
    pub next_cursor: Option<ProductId>,
    /// Whether items remain beyond this slice.
    pub has_more: bool,
    /// Total items in the filtered set.
    pub total: i64,
}

/// Slice `limit` items starting after the cursor position.
///
/// The cursor is the id of the last item returned by the previous call, or
/// `None` for the first call. A cursor that no longer resolves in the current
/// sequence (the catalog changed underneath the scan) restarts from the
/// beginning rather than erroring.
///
/// For a static sequence, chaining `next_cursor` partitions the full sequence
/// with no gaps or duplicates and terminates with `has_more == false`.
pub fn paginate_by_cursor(
    items: &[Product],
    cursor: Option<ProductId>,
    limit: i64,
) -> CursorPage {
    debug_assert!(limit > 0, "limit validated at the fetch boundary");

    let start = cursor
        .and_then(|c| items.iter().position(|p| p.id == c))
        .map(|pos| pos + 1)
        .unwrap_or(0);

    let end = (start + limit as usize).min(items.len());
    let slice = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let has_more = end < items.len();
    let next_cursor = if has_more {
        slice.last().map(|p| p.id)
    } else {
        None
    };

    CursorPage {
        items: slice,
        next_cursor,
        has_more,
        total: items.len() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vend_core::{Category, Money};

    fn products(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|i| Product::new(i, format!("Item {i}"), Category::Sports, Money::usd(500)))
            .collect()
    }

    #[test]
    fn test_first_call_starts_at_beginning() {
        let page = paginate_by_cursor(&products(10), None, 4);
        assert_eq!(page.items[0].id, ProductId::new(1));
        assert_eq!(page.items.len(), 4);
        assert!(page.has_more);
        assert_eq!(page.next_cursor, Some(ProductId::new(4)));
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_chained_calls_partition_the_sequence() {
        let items = products(10);
        let mut seen = Vec::new();
        let mut cursor = None;
        loop {
            let page = paginate_by_cursor(&items, cursor, 3);
            seen.extend(page.items.iter().map(|p| p.id.get()));
            if !page.has_more {
                assert_eq!(page.next_cursor, None);
                break;
            }
            cursor = page.next_cursor;
        }
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_unknown_cursor_restarts_from_beginning() {
        let page = paginate_by_cursor(&products(5), Some(ProductId::new(999)), 2);
        assert_eq!(page.items[0].id, ProductId::new(1));
    }

    #[test]
    fn test_cursor_at_last_item_yields_empty_end() {
        let page = paginate_by_cursor(&products(5), Some(ProductId::new(5)), 2);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_exact_final_slice_reports_no_more() {
        let page = paginate_by_cursor(&products(6), Some(ProductId::new(3)), 3);
        assert_eq!(page.items.len(), 3);
        assert!(!page.has_more);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_empty_sequence() {
        let page = paginate_by_cursor(&[], None, 5);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.total, 0);
    }
}
