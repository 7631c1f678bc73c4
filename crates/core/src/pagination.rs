//! Client-side page math for the product listing.
//!
//! The pager only tracks the current page and the page size; callers pass
//! the length of the filtered list to every query so derived values can
//! never go stale.

use std::ops::Range;

use serde::Serialize;

use crate::error::CoreError;

/// Default number of rows per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Maximum number of page buttons shown by the pager control.
pub const VISIBLE_PAGE_COUNT: usize = 5;

/// 1-based, inclusive row range shown under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    items_per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Pager {
    /// A pager on page 1 with the given page size.
    pub fn new(items_per_page: usize) -> Result<Self, CoreError> {
        let mut pager = Self::default();
        pager.set_items_per_page(items_per_page)?;
        Ok(pager)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Change the page size and go back to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), CoreError> {
        if items_per_page == 0 {
            return Err(CoreError::Validation(
                "items per page must be at least 1".to_string(),
            ));
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        Ok(())
    }

    /// Go back to page 1 unconditionally.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// `ceil(total_items / items_per_page)`; zero for an empty list.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page)
    }

    /// Move to `page` if it is within `1..=total_pages`.
    ///
    /// Returns whether the page changed. Out-of-range requests (including
    /// any request while there are no pages) leave the pager untouched.
    pub fn go_to(&mut self, page: usize, total_items: usize) -> bool {
        if page < 1 || page > self.total_pages(total_items) {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn previous(&mut self, total_items: usize) -> bool {
        self.go_to(self.current_page.saturating_sub(1), total_items)
    }

    pub fn next(&mut self, total_items: usize) -> bool {
        self.go_to(self.current_page + 1, total_items)
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self, total_items: usize) -> bool {
        self.current_page == self.total_pages(total_items)
    }

    pub fn info(&self, total_items: usize) -> PageInfo {
        PageInfo {
            start: (self.current_page - 1) * self.items_per_page + 1,
            end: (self.current_page * self.items_per_page).min(total_items),
        }
    }

    /// Up to [`VISIBLE_PAGE_COUNT`] consecutive page numbers starting two
    /// before the current page, never past the last page.
    pub fn visible_window(&self, total_items: usize) -> Vec<usize> {
        let total_pages = self.total_pages(total_items);
        let start = self.current_page.saturating_sub(2).max(1);
        let len = VISIBLE_PAGE_COUNT.min(total_pages);
        (start..start + len).filter(|p| *p <= total_pages).collect()
    }

    /// Index range of the current page within a list of `total_items`.
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.items_per_page).min(total_items);
        let end = (start + self.items_per_page).min(total_items);
        start..end
    }

    /// The rows of the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}
