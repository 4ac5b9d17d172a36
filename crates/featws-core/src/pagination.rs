//! Client-side pagination contract.
//!
//! The controller declares the page size and current page; the rendering
//! surface performs the actual windowing over whatever collection it
//! currently receives. Page-size changes never touch filtering or
//! selection state.

use std::fmt;

/// Enumerated rows-per-page option set offered by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

/// All selectable page sizes, in the order the grid offers them.
pub const PAGE_SIZE_OPTIONS: [PageSize; 5] = [
    PageSize::Five,
    PageSize::Ten,
    PageSize::TwentyFive,
    PageSize::Fifty,
    PageSize::Hundred,
];

impl PageSize {
    pub fn as_usize(&self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Map a raw row count to an option, if it is one of the offered sizes.
    pub fn from_rows(rows: usize) -> Option<Self> {
        PAGE_SIZE_OPTIONS
            .into_iter()
            .find(|size| size.as_usize() == rows)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Page size and current page of the grid window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    page_size: PageSize,
    current_page: usize,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Change the page size, returning to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.current_page = 0;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    /// Number of pages needed for `len` rows; an empty collection still
    /// renders one (empty) page.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.as_usize()).max(1)
    }

    /// The index range of the current page over a collection of `len` rows,
    /// clamped to the collection bounds.
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let size = self.page_size.as_usize();
        let start = self.current_page.saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }
}
