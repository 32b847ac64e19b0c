//! Page strip for the contact list
//!
//! A pure function of the number of contacts and the page size. It holds no
//! selection of its own; the controller owns the current page.

use std::ops::RangeInclusive;

/// Page numbers derived from a total and a page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    per_page: usize,
}

impl Pagination {
    pub fn new(total: usize, per_page: usize) -> Self {
        Self { total, per_page }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages, `ceil(total / per_page)`
    pub fn page_count(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// Page numbers shown on the strip, 1-based
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.page_count()
    }

    pub fn contains(&self, page: usize) -> bool {
        self.pages().contains(&page)
    }

    /// The page number emitted when `page` is clicked
    ///
    /// Returns `None` for a number that is not on the strip.
    pub fn select(&self, page: usize) -> Option<usize> {
        self.contains(page).then_some(page)
    }

    /// Half-open index window `[(page-1)*per_page, page*per_page)` clamped to `total`
    pub fn window(&self, page: usize) -> std::ops::Range<usize> {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(self.per_page).min(self.total);
        let end = page.saturating_mul(self.per_page).min(self.total);
        start..end
    }
}
