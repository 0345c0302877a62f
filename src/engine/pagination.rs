use serde::Serialize;

/// Page size used by every listing screen
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One page worth of items plus what pagination controls need to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Requested page number (1-based), not clamped
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `count` items; never less than 1.
/// A page size of 0 is treated as 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Slice out page `page` (1-based) of `items`.
///
/// Pages past the end (and page 0) give an empty slice; keeping the page in
/// range is the caller's job.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);

    let page_items = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(items.len());
            let end = start.saturating_add(page_size).min(items.len());
            items[start..end].to_vec()
        }
        None => Vec::new(),
    };

    Page {
        items: page_items,
        page,
        page_size,
        total_items: items.len(),
        total_pages,
    }
}
