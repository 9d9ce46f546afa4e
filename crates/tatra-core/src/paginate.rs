// crates/tatra-core/src/paginate.rs
use serde::{Deserialize, Serialize};

/// Trails per page on the listing views.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One-indexed page slice: `[(page-1)*size, page*size)` clipped to the
/// collection bounds.
///
/// Pages past the end are empty. Page `0` and a page size of `0` are caller
/// contract violations and also yield an empty page.
///
/// ```rust
/// use tatra_core::paginate::paginate;
///
/// let items = ["a", "b", "c"];
/// assert_eq!(paginate(&items, 2, 1), ["a", "b"]);
/// assert_eq!(paginate(&items, 2, 2), ["c"]);
/// assert!(paginate(&items, 2, 3).is_empty());
/// ```
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Vec<T> {
    page_range(items.len(), page_size, page_number)
        .map(|r| items[r].to_vec())
        .unwrap_or_default()
}

fn page_range(len: usize, page_size: usize, page_number: usize) -> Option<std::ops::Range<usize>> {
    if page_size == 0 || page_number == 0 {
        return None;
    }
    let start = (page_number - 1).checked_mul(page_size)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(page_size).min(len);
    Some(start..end)
}

/// Pager metadata for a listing view ("showing 13–24 of 40").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// One-indexed position of the first item shown, `0` on an empty page.
    pub first_item: usize,
    /// One-indexed position of the last item shown, `0` on an empty page.
    pub last_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageInfo {
    pub fn new(total_items: usize, page_size: usize, page: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        let (first_item, last_item) = match page_range(total_items, page_size, page) {
            Some(r) => (r.start + 1, r.end),
            None => (0, 0),
        };
        Self {
            page,
            page_size,
            total_items,
            total_pages,
            first_item,
            last_item,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}
