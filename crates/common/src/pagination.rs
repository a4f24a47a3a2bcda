//! Pagination utilities shared by the model and service layers
//!
//! Provides a 1-based `Pagination` request and a `Page<T>` result carrying totals.

use serde::Serialize;

/// Upper bound for `per_page`; larger requests are clamped.
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Clamp to sane defaults and convert to a 0-based page index plus page size.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }

    /// Number of rows to skip for this page after normalization.
    pub fn offset(self) -> u64 {
        let (idx, per_page) = self.normalize();
        idx * per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 20 }
    }
}

/// One page of results together with the totals of the whole result set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page index actually served
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from already-sliced items and the total row count.
    pub fn new(items: Vec<T>, pagination: Pagination, total_items: u64) -> Self {
        let (idx, per_page) = pagination.normalize();
        Self {
            items,
            page: idx + 1,
            per_page,
            total_items,
            total_pages: total_items.div_ceil(per_page),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, Pagination, MAX_PER_PAGE};

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, MAX_PER_PAGE as u64);
    }

    #[test]
    fn first_page_has_no_offset() {
        assert_eq!(Pagination::new(1, 5).offset(), 0);
        assert_eq!(Pagination::new(3, 5).offset(), 10);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 20);
    }

    #[test]
    fn page_totals_round_up() {
        let page = Page::new(vec![1, 2, 3, 4, 5], Pagination::new(1, 5), 15);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next());

        let last = Page::new(vec![16], Pagination::new(4, 5), 16);
        assert_eq!(last.total_pages, 4);
        assert!(!last.has_next());

        let empty: Page<u8> = Page::new(vec![], Pagination::new(1, 5), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn map_keeps_totals_and_serializes_camel_case() {
        let page = Page::new(vec![1, 2], Pagination::new(2, 2), 4).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page, 2);
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"totalItems\":4"));
        assert!(json.contains("\"perPage\":2"));
    }
}
