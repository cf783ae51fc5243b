//! Pure pagination math and page-window shaping helpers.

use thiserror::Error;

/// Maximum number of page numbers shown as clickable controls.
pub const MAX_VISIBLE_PAGES: usize = 10;

/// Caller contract violations for the pagination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// `limit` must be at least one item per page.
    #[error("invalid argument: page limit must be positive (got {limit})")]
    InvalidArgument { limit: usize },
}

/// Page metadata derived from `(total, limit, current_offset)`.
///
/// Never mutated in place; every input change produces a fresh window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page, 1-based. Computed arithmetically, so it may exceed
    /// `total_pages` when the offset points past the last page.
    pub current_page: usize,
    /// Total number of pages, `0` when there are no items.
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    /// Ascending, contiguous page numbers to render, at most
    /// [`MAX_VISIBLE_PAGES`] long.
    pub visible_pages: Vec<usize>,
    limit: usize,
}

impl PageWindow {
    /// Items per page this window was computed for.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether `page` is a navigable page of this window.
    pub fn contains_page(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// First and last entries of the visible window.
    pub fn visible_bounds(&self) -> Option<(usize, usize)> {
        Some((*self.visible_pages.first()?, *self.visible_pages.last()?))
    }
}

/// Compute the page window for a result set.
///
/// Fails only when `limit` is zero. Empty result sets and offsets beyond the
/// last page produce a valid (possibly empty) window.
pub fn compute_window(
    total: usize,
    limit: usize,
    current_offset: usize,
) -> Result<PageWindow, PaginationError> {
    if limit == 0 {
        return Err(PaginationError::InvalidArgument { limit });
    }

    let current_page = (current_offset / limit).saturating_add(1);
    let total_pages = total_pages(total, limit);

    Ok(PageWindow {
        current_page,
        total_pages,
        has_next_page: current_page < total_pages,
        has_prev_page: current_page > 1,
        visible_pages: visible_page_numbers(current_page, total_pages),
        limit,
    })
}

/// Sliding window of page numbers centred on `current_page`.
///
/// Clamps to `[1, total_pages]` first, then re-anchors the start so the
/// window stays as wide as the page count allows near either edge.
pub fn visible_page_numbers(current_page: usize, total_pages: usize) -> Vec<usize> {
    let mut start = current_page
        .saturating_sub(MAX_VISIBLE_PAGES / 2)
        .max(1);
    let end = total_pages.min(start.saturating_add(MAX_VISIBLE_PAGES - 1));

    if end.saturating_sub(start) < MAX_VISIBLE_PAGES - 1 {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }

    (start..=end).collect()
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Zero-based offset of the first item on `page`.
pub fn offset_for_page(page: usize, per_page: usize) -> usize {
    page.saturating_sub(1).saturating_mul(per_page)
}

/// Return start/end item indices for a page of a locally held list.
pub fn item_range(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = offset_for_page(page, safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}
