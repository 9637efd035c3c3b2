//! List Projection Engine
//!
//! Pages over the current record set and computes the compact pager.

use crate::error::{DashboardError, Result};
use crate::record::Record;

/// Page counts up to this value show every page number
const PAGER_FULL_LIMIT: usize = 7;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// The slice of records currently on screen plus its coordinates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageView {
    pub items: Vec<Record>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageView {
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    /// e.g. `11–20 of 57`
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0 of {}", self.total_items);
        }
        let first = self.page_index * self.page_size + 1;
        let last = first + self.items.len() - 1;
        format!("{}–{} of {}", first, last, self.total_items)
    }
}

/// Notification that the visible page moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChanged {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageTurn {
    pub page: PageView,
    pub changed: PageChanged,
}

/// Entry of the compact pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    /// 1-based page number
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone)]
pub struct ListProjection {
    records: Vec<Record>,
    page_index: usize,
    page_size: usize,
}

impl Default for ListProjection {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListProjection {
    /// A zero `page_size` falls back to the default
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            page_index: 0,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.records.len()
    }

    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replace the set and return to the first page
    pub fn set_records(&mut self, records: Vec<Record>) -> PageView {
        self.records = records;
        self.page_index = 0;
        self.current_page()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<PageView> {
        if page_size == 0 {
            return Err(DashboardError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.clamp_page_index();
        Ok(self.current_page())
    }

    /// `None` (and no state change) when `index` is outside `[0, total_pages)`
    pub fn go_to_page(&mut self, index: usize) -> Option<PageTurn> {
        if index >= self.total_pages() {
            return None;
        }
        let previous = self.page_index;
        self.page_index = index;
        Some(PageTurn {
            page: self.current_page(),
            changed: PageChanged {
                previous,
                current: index,
            },
        })
    }

    pub fn next(&mut self) -> Option<PageTurn> {
        self.go_to_page(self.page_index + 1)
    }

    pub fn previous(&mut self) -> Option<PageTurn> {
        let index = self.page_index.checked_sub(1)?;
        self.go_to_page(index)
    }

    pub fn current_page(&self) -> PageView {
        let start = (self.page_index * self.page_size).min(self.records.len());
        let end = (start + self.page_size).min(self.records.len());
        PageView {
            items: self.records[start..end].to_vec(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_items: self.records.len(),
            total_pages: self.total_pages(),
        }
    }

    pub fn pager(&self) -> Vec<PagerItem> {
        pager_items(self.page_index, self.total_pages())
    }

    fn clamp_page_index(&mut self) {
        let last = self.total_pages().max(1) - 1;
        self.page_index = self.page_index.min(last);
    }
}

/// Compact pager for `total_pages` pages with `page_index` (0-based) current.
///
/// Never more than nine entries: first page, last page, and a window around
/// the current page separated by ellipses.
pub fn pager_items(page_index: usize, total_pages: usize) -> Vec<PagerItem> {
    use PagerItem::{Ellipsis, Page};

    if total_pages <= PAGER_FULL_LIMIT {
        return (1..=total_pages).map(Page).collect();
    }

    let current = page_index.min(total_pages - 1) + 1;
    let mut items = vec![Page(1)];
    if current <= 3 {
        items.extend((2..=5).map(Page));
        items.push(Ellipsis);
    } else if current > total_pages - 4 {
        items.push(Ellipsis);
        items.extend((total_pages - 4..total_pages).map(Page));
    } else {
        items.push(Ellipsis);
        items.extend((current - 1..=current + 1).map(Page));
        items.push(Ellipsis);
    }
    items.push(Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LatLng, Status};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use super::PagerItem::{Ellipsis, Page};

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                id: i.to_string(),
                task: "Work Flow:Customer Survey".to_string(),
                status: Status::Incomplete,
                from: "a@example.com".to_string(),
                to: "b@example.com".to_string(),
                address: "123 Main St, London, UK".to_string(),
                due_date: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
                location: LatLng::new(51.5, -0.1),
            })
            .collect()
    }

    #[test]
    fn test_set_records_resets_to_first_page() {
        let mut list = ListProjection::new(10);
        list.set_records(records(35));
        list.go_to_page(3).unwrap();

        let page = list.set_records(records(12));
        assert_eq!(page.page_index, 0);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut list = ListProjection::new(10);
        list.set_records(records(35));
        let turn = list.go_to_page(3).unwrap();
        assert_eq!(turn.page.items.len(), 5);
        assert_eq!(turn.page.items[0].id, "30");
        assert_eq!(turn.changed, PageChanged { previous: 0, current: 3 });
        assert_eq!(turn.page.range_label(), "31–35 of 35");
    }

    #[test]
    fn test_go_to_page_out_of_range_is_noop() {
        let mut list = ListProjection::new(10);
        list.set_records(records(35));
        list.go_to_page(2).unwrap();

        assert!(list.go_to_page(4).is_none());
        assert!(list.go_to_page(usize::MAX).is_none());
        assert_eq!(list.page_index(), 2);
    }

    #[test]
    fn test_next_previous_bounded() {
        let mut list = ListProjection::new(10);
        list.set_records(records(15));
        assert!(list.previous().is_none());
        assert_eq!(list.next().unwrap().page.page_index, 1);
        assert!(list.next().is_none());
        assert_eq!(list.page_index(), 1);
        assert_eq!(list.previous().unwrap().page.page_index, 0);
    }

    #[test]
    fn test_page_size_change_clamps() {
        let mut list = ListProjection::new(5);
        list.set_records(records(23));
        list.go_to_page(4).unwrap();

        let page = list.set_page_size(20).unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.items.len(), 3);

        assert!(matches!(list.set_page_size(0), Err(DashboardError::InvalidPageSize)));
        assert_eq!(list.page_size(), 20);
    }

    #[test]
    fn test_empty_set() {
        let mut list = ListProjection::new(10);
        let page = list.set_records(Vec::new());
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(list.go_to_page(0).is_none());
        assert_eq!(page.range_label(), "0 of 0");
        assert!(list.pager().is_empty());
    }

    #[test]
    fn test_pager_small_counts_show_all() {
        for total in 1..=6 {
            let expected: Vec<_> = (1..=total).map(Page).collect();
            assert_eq!(pager_items(0, total), expected);
        }
        assert_eq!(pager_items(6, 7).len(), 7);
    }

    #[test]
    fn test_pager_middle_window() {
        assert_eq!(
            pager_items(10, 20),
            vec![Page(1), Ellipsis, Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_pager_near_edges() {
        assert_eq!(
            pager_items(2, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(
            pager_items(16, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            pager_items(3, 20),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    proptest! {
        #[test]
        fn pages_partition_the_set(n in 0usize..200, page_size in 1usize..40) {
            let mut list = ListProjection::new(page_size);
            list.set_records(records(n));
            prop_assert_eq!(list.total_pages(), (n + page_size - 1) / page_size);

            let mut seen = Vec::new();
            for index in 0..list.total_pages() {
                let turn = list.go_to_page(index).unwrap();
                seen.extend(turn.page.items.into_iter().map(|r| r.id));
            }
            let expected: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn pager_is_bounded_and_contains_current(total in 1usize..500, index in 0usize..500) {
            let index = index % total;
            let items = pager_items(index, total);
            prop_assert!(items.len() <= 9);
            prop_assert!(items.contains(&Page(index + 1)));
            prop_assert_eq!(items.first(), Some(&Page(1)));
            prop_assert_eq!(items.last(), Some(&Page(total)));
        }
    }
}
