//! Page cursor for the trending feed and search.

use crate::domain::PageInfo;

/// One-based page cursor with the metadata of the last accepted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    last_info: Option<PageInfo>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, last_info: None }
    }
}

impl Pagination {
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Back to page 1, forgetting page metadata.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves back one page, never below 1. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Moves forward one page. Returns whether the page changed.
    ///
    /// Refused only when the metadata of the last accepted page proves it was
    /// the final one; without metadata there is no upper bound.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page = self.page.saturating_add(1);
        true
    }

    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        !self.last_info.is_some_and(|info| info.is_last_page())
    }

    /// Records the metadata of the latest accepted trending page, or `None`.
    pub fn record(&mut self, info: Option<PageInfo>) {
        self.last_info = info;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_never_goes_below_one() {
        for start in 1..=20u32 {
            let mut pagination = Pagination::default();
            for _ in 1..start {
                assert!(pagination.next());
            }
            assert_eq!(pagination.page(), start);

            for _ in 0..(start + 5) {
                pagination.prev();
                assert!(pagination.page() >= 1);
            }
            assert_eq!(pagination.page(), 1);
        }
    }

    #[test]
    fn next_is_unbounded_without_metadata() {
        let mut pagination = Pagination::default();
        for _ in 0..100 {
            assert!(pagination.next());
        }
        assert_eq!(pagination.page(), 101);
    }

    #[test]
    fn next_stops_at_reported_last_page() {
        let mut pagination = Pagination::default();
        pagination.record(Some(PageInfo { total_count: Some(20), count: Some(12), offset: Some(0) }));
        assert!(pagination.next());

        pagination.record(Some(PageInfo { total_count: Some(20), count: Some(8), offset: Some(12) }));
        assert!(!pagination.can_next());
        assert!(!pagination.next());
        assert_eq!(pagination.page(), 2);
    }

    #[test]
    fn reset_forgets_metadata() {
        let mut pagination = Pagination::default();
        pagination.next();
        pagination.record(Some(PageInfo { total_count: Some(1), count: Some(1), offset: Some(0) }));
        pagination.reset();
        assert_eq!(pagination.page(), 1);
        assert!(pagination.can_next());
    }
}
