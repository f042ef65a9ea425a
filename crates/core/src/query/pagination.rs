use serde::Serialize;

/// Number of records per page in event listings.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// One page of a record listing.
///
/// A derived view over a listing; it is never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total_pages: usize,
    /// The 1-based page number that was requested.
    pub current_page: usize,
    pub total_items: usize,
}

/// Cuts the 1-based `page` out of `items`.
///
/// Pages past the end, and page 0, come back with no records rather than an
/// error. A `page_size` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();

    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .map_or(total_items, |s| s.min(total_items));
    let end = start.saturating_add(page_size).min(total_items);

    Page {
        records: items[start..end].to_vec(),
        total_pages: total_items.div_ceil(page_size),
        current_page: page,
        total_items,
    }
}
