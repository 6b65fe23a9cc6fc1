//! Client-side pagination arithmetic.
//!
//! Pages are 1-based. The current page is clamped into `1..=total_pages`
//! on every change, including changes of the item count or page size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Invoked with the new page whenever the effective page changes
pub type PageChangeHook = Arc<dyn Fn(usize) + Send + Sync>;

/// 1-based inclusive bounds of the rows shown on the current page.
/// `{0, 0}` when there are no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub total_items: usize,
    pub page_size: usize,
    pub initial_page: usize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            total_items: 0,
            page_size: DEFAULT_PAGE_SIZE,
            initial_page: 1,
        }
    }
}

impl PaginationOptions {
    pub fn new(total_items: usize) -> Self {
        Self {
            total_items,
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
    on_page_change: Option<PageChangeHook>,
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("current_page", &self.current_page)
            .field("page_size", &self.page_size)
            .field("total_items", &self.total_items)
            .field("has_page_change_hook", &self.on_page_change.is_some())
            .finish()
    }
}

fn total_pages_for(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

impl Pagination {
    pub fn new(options: PaginationOptions) -> Self {
        let page_size = options.page_size.max(1);
        let total_pages = total_pages_for(options.total_items, page_size);
        Self {
            current_page: options.initial_page.clamp(1, total_pages),
            page_size,
            total_items: options.total_items,
            on_page_change: None,
        }
    }

    pub fn with_page_change_hook(mut self, hook: PageChangeHook) -> Self {
        self.on_page_change = Some(hook);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages_for(self.total_items, self.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// 0-based index of the first row on the current page
    pub fn start_index(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.current_page - 1) * self.page_size
    }

    /// 0-based exclusive end of the current page
    pub fn end_index(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.start_index() + self.page_size).min(self.total_items)
    }

    pub fn page_range(&self) -> PageRange {
        if self.total_items == 0 {
            return PageRange::default();
        }
        PageRange {
            start: self.start_index() + 1,
            end: self.end_index(),
        }
    }

    /// Rows of the current page. Shorter slices than `total_items` are
    /// cut at their own length.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index().min(items.len());
        let start = self.start_index().min(end);
        &items[start..end]
    }

    pub fn go_to_page(&mut self, page: usize) {
        let next = page.clamp(1, self.total_pages());
        self.set_current_page(next);
    }

    pub fn go_to_next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn go_to_previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.reclamp();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reclamp();
    }

    fn reclamp(&mut self) {
        let next = self.current_page.clamp(1, self.total_pages());
        self.set_current_page(next);
    }

    fn set_current_page(&mut self, next: usize) {
        if next == self.current_page {
            return;
        }
        self.current_page = next;
        if let Some(hook) = &self.on_page_change {
            hook(next);
        }
    }
}
