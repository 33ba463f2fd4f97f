use std::ops::Range;

/// Fixed-size pages over the track list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    page: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// `ceil(len / page_size)`, never less than one.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Show `page`, clamped into `1..=page_count`.
    pub fn switch_page(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.page_count(len));
    }

    /// Rows visible on the current page.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Page holding row `index`.
    pub fn page_of(&self, index: usize) -> usize {
        index / self.page_size + 1
    }
}
