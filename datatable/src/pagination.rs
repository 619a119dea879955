//! Pagination window over the ordered rows.

use std::ops::Range;

/// Page metadata for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 0-based.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total rows across all pages.
    pub total_rows: usize,
    /// Number of pages, at least 1.
    pub page_count: usize,
}

impl PageInfo {
    /// Whether the current page lies past the last row.
    pub fn is_out_of_range(&self) -> bool {
        self.page_index >= self.page_count
    }
}

/// Page index and size, plus the page sizes offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    enabled: bool,
    /// Sizes as configured, before the current size is merged in.
    configured_options: Vec<usize>,
    rows_per_page_options: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Pagination {
    /// Create an enabled pagination with the given page size (clamped to 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            enabled: true,
            configured_options: Vec::new(),
            rows_per_page_options: Vec::new(),
        }
    }

    /// Create a disabled pagination; the window always spans every row.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the page sizes offered to the user.
    ///
    /// The current page size is always included.
    pub fn with_options(mut self, options: Vec<usize>) -> Self {
        self.configured_options = options.into_iter().filter(|&size| size > 0).collect();
        self.normalize_options();
        self
    }

    fn normalize_options(&mut self) {
        self.rows_per_page_options.clear();
        if self.configured_options.is_empty() {
            return;
        }
        self.rows_per_page_options.extend_from_slice(&self.configured_options);
        self.rows_per_page_options.push(self.page_size);
        self.rows_per_page_options.sort_unstable();
        self.rows_per_page_options.dedup();
    }

    /// Whether pagination is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page sizes offered to the user.
    pub fn rows_per_page_options(&self) -> &[usize] {
        &self.rows_per_page_options
    }

    /// Go to a page. Out-of-range pages are allowed and yield an empty window.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Change the page size (clamped to 1) and return to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
        self.normalize_options();
    }

    /// Number of pages for `total` rows, at least 1.
    pub fn page_count(&self, total: usize) -> usize {
        if !self.enabled {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// Whether a page exists after the current one.
    pub fn has_next(&self, total: usize) -> bool {
        self.page_index.saturating_add(1) < self.page_count(total)
    }

    /// Whether a page exists before the current one.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Advance one page, stopping at the last page. Returns true if moved.
    pub fn next_page(&mut self, total: usize) -> bool {
        if self.has_next(total) {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page, clamping an out-of-range index to the last page.
    /// Returns true if moved.
    pub fn previous_page(&mut self, total: usize) -> bool {
        let last = self.page_count(total) - 1;
        if self.page_index > last {
            self.page_index = last;
            return true;
        }
        if self.page_index > 0 {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Go to the first page.
    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// Go to the last page.
    pub fn last_page(&mut self, total: usize) {
        self.page_index = self.page_count(total) - 1;
    }

    /// Index range of the visible rows within `total` ordered rows.
    pub fn window(&self, total: usize) -> Range<usize> {
        if !self.enabled {
            return 0..total;
        }
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// The visible slice of the ordered rows.
    pub fn visible<'a, T>(&self, ordered: &'a [T]) -> &'a [T] {
        &ordered[self.window(ordered.len())]
    }

    /// Page metadata for `total` rows.
    pub fn page_info(&self, total: usize) -> PageInfo {
        PageInfo {
            page_index: self.page_index,
            page_size: if self.enabled { self.page_size } else { total },
            total_rows: total,
            page_count: self.page_count(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps_last_page() {
        let mut p = Pagination::new(4);
        p.set_page(2);
        assert_eq!(p.window(10), 8..10);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let mut p = Pagination::new(5);
        p.set_page(7);
        assert!(p.window(12).is_empty());
        assert!(p.page_info(12).is_out_of_range());
    }

    #[test]
    fn test_page_size_zero_clamps_to_one() {
        let mut p = Pagination::new(0);
        assert_eq!(p.page_size(), 1);
        p.set_page_size(0);
        assert_eq!(p.page_size(), 1);
    }

    #[test]
    fn test_options_include_current_size() {
        let p = Pagination::new(15).with_options(vec![25, 10, 0, 10]);
        assert_eq!(p.rows_per_page_options(), &[10, 15, 25]);
    }

    #[test]
    fn test_options_do_not_accumulate_custom_sizes() {
        let mut p = Pagination::new(10).with_options(vec![10, 25]);
        p.set_page_size(7);
        assert_eq!(p.rows_per_page_options(), &[7, 10, 25]);
        p.set_page_size(13);
        assert_eq!(p.rows_per_page_options(), &[10, 13, 25]);
        p.set_page_size(25);
        assert_eq!(p.rows_per_page_options(), &[10, 25]);
    }

    #[test]
    fn test_next_from_max_index_does_not_move() {
        let mut p = Pagination::new(10);
        p.set_page(usize::MAX);
        assert!(!p.has_next(25));
        assert!(!p.next_page(25));
        assert!(p.window(25).is_empty());
        assert!(p.previous_page(25));
        assert_eq!(p.page_index(), 2);
    }

    #[test]
    fn test_previous_from_out_of_range_lands_on_last_page() {
        let mut p = Pagination::new(10);
        p.set_page(9);
        assert!(p.previous_page(25));
        assert_eq!(p.page_index(), 2);
    }

    #[test]
    fn test_disabled_spans_everything() {
        let p = Pagination::disabled();
        assert_eq!(p.window(42), 0..42);
        assert_eq!(p.page_count(42), 1);
    }
}
