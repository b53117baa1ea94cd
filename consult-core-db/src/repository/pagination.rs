/// Offset window into a history listing.
///
/// ```
/// use consult_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::first(50);
/// assert_eq!(first.offset, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    pub fn first(limit: usize) -> Self {
        Self::new(limit, 0)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(20)
    }
}

/// One window of rows plus the total row count behind it.
///
/// ```
/// use consult_core_db::repository::pagination::{Page, PageRequest};
///
/// let page = Page::new(vec![1, 2, 3], 7, 3, 0);
/// assert!(page.has_more());
/// assert_eq!(page.next_request(), Some(PageRequest::new(3, 3)));
/// assert_eq!(page.total_pages(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Row count across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// A page with no rows for the given window.
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), 0, request.limit, request.offset)
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Window following this one, if rows remain.
    ///
    /// Advances by the rows actually returned so a short page from the
    /// store cannot skip rows. `None` once a page comes back empty.
    pub fn next_request(&self) -> Option<PageRequest> {
        if self.items.is_empty() || !self.has_more() {
            return None;
        }
        Some(PageRequest::new(self.limit, self.offset + self.items.len()))
    }

    /// 1-based
    pub fn page_number(&self) -> usize {
        match self.limit {
            0 => 1,
            limit => self.offset / limit + 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        match self.limit {
            0 => 1,
            limit => self.total.div_ceil(limit).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_request_walks_to_the_end() {
        let first = Page::new(vec!["a", "b", "c"], 7, 3, 0);
        assert_eq!(first.next_request(), Some(PageRequest::new(3, 3)));

        let last = Page::new(vec!["g"], 7, 3, 6);
        assert!(!last.has_more());
        assert_eq!(last.next_request(), None);
        assert_eq!(last.page_number(), 3);
        assert_eq!(last.total_pages(), 3);
    }

    #[test]
    fn test_short_page_advances_by_rows_returned() {
        let page = Page::new(vec![1, 2], 10, 5, 0);
        assert_eq!(page.next_request(), Some(PageRequest::new(5, 2)));
    }

    #[test]
    fn test_empty_page_stops_walk() {
        // Total says more rows exist but none came back
        let page: Page<u8> = Page::new(vec![], 4, 2, 2);
        assert_eq!(page.next_request(), None);
    }

    #[test]
    fn test_empty_listing_is_one_page() {
        let page: Page<u8> = Page::empty(PageRequest::default());
        assert_eq!(page.page_number(), 1);
        assert_eq!(page.total_pages(), 1);
        assert!(!page.has_more());
    }
}
