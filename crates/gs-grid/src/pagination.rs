//! The pagination engine.
//!
//! [`Paginator`] owns `{page, page_size}` for a sequence of a known length and
//! keeps `page` clamped into `[1, total_pages]` at all times. Out-of-range
//! requests clamp silently. Every mutator returns whether the visible page
//! changed so the owner can notify listeners in the same call.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::Serialize;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Number of pages needed for `total_items`, never less than one.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use gs_grid::pagination::total_pages;
///
/// let ten = NonZeroUsize::new(10).unwrap();
/// assert_eq!(total_pages(0, ten), 1);
/// assert_eq!(total_pages(10, ten), 1);
/// assert_eq!(total_pages(11, ten), 2);
/// ```
#[must_use]
pub const fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    let pages = total_items.div_ceil(page_size.get());
    if pages == 0 { 1 } else { pages }
}

/// Index range of `page` (1-based) clipped to `total_items`.
#[must_use]
pub fn page_range(total_items: usize, page: usize, page_size: NonZeroUsize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size.get())
        .min(total_items);
    let end = start.saturating_add(page_size.get()).min(total_items);
    start..end
}

/// Snapshot of pagination state for display and listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total number of pages, at least one.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
}

impl PageMeta {
    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Page state over a sequence of `total_items` items.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use gs_grid::Paginator;
///
/// let mut paginator = Paginator::new(NonZeroUsize::new(2).unwrap());
/// paginator.set_total_items(5);
/// assert_eq!(paginator.total_pages(), 3);
///
/// paginator.go_to_page(99);
/// assert_eq!(paginator.page(), 3);
/// assert_eq!(paginator.range(), 4..5);
///
/// paginator.set_page_size(NonZeroUsize::new(4).unwrap());
/// assert_eq!(paginator.page(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: NonZeroUsize,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Creates a paginator on page 1 over an empty sequence.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page: 1,
            page_size,
            total_items: 0,
        }
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Length of the paged sequence.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, at least one.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Index range of the current page.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        page_range(self.total_items, self.page, self.page_size)
    }

    /// The current page of `items`.
    ///
    /// `items` is expected to have `total_items` elements; a shorter slice is
    /// clipped.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Snapshot for display.
    #[must_use]
    pub const fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.page,
            page_size: self.page_size.get(),
            total_pages: self.total_pages(),
            total_items: self.total_items,
        }
    }

    /// Moves to page `n`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        let target = n.clamp(1, self.total_pages());
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Moves one page forward if possible.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_add(1))
    }

    /// Moves one page back if possible.
    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) -> bool {
        let changed = page_size != self.page_size || self.page != 1;
        self.page_size = page_size;
        self.page = 1;
        changed
    }

    /// Updates the sequence length and re-clamps the page.
    pub fn set_total_items(&mut self, total_items: usize) -> bool {
        let before = self.meta();
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.total_pages());
        before != self.meta()
    }
}
