//! Selection Tracker
//!
//! Checked rows of the list view, keyed by record id so membership
//! survives page changes.

use crate::record::Record;

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    /// Selected records in the order they were checked
    selected: Vec<Record>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected(&self) -> Vec<Record> {
        self.selected.clone()
    }

    /// Non-empty `visible` with every row already checked
    pub fn is_all_selected(&self, visible: &[Record]) -> bool {
        !visible.is_empty() && visible.iter().all(|r| self.is_selected(&r.id))
    }

    /// Some but not all of `visible` checked
    pub fn is_partially_selected(&self, visible: &[Record]) -> bool {
        visible.iter().any(|r| self.is_selected(&r.id)) && !self.is_all_selected(visible)
    }

    pub fn toggle(&mut self, record: &Record) -> Vec<Record> {
        if let Some(pos) = self.selected.iter().position(|r| r.id == record.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(record.clone());
        }
        self.selected()
    }

    /// Uncheck the rows of `visible` when all of them are checked, otherwise
    /// check every row of `visible`. Rows outside `visible` keep their state.
    pub fn toggle_all(&mut self, visible: &[Record]) -> Vec<Record> {
        if self.is_all_selected(visible) {
            self.selected
                .retain(|record| !visible.iter().any(|v| v.id == record.id));
        } else {
            for record in visible {
                if !self.is_selected(&record.id) {
                    self.selected.push(record.clone());
                }
            }
        }
        self.selected()
    }

    pub fn clear(&mut self) -> Vec<Record> {
        self.selected.clear();
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LatLng, Status};
    use chrono::{TimeZone, Utc};

    fn rec(id: &str) -> Record {
        Record {
            id: id.to_string(),
            task: "Work Flow:Requires Location".to_string(),
            status: Status::Unassigned,
            from: "a@example.com".to_string(),
            to: "b@example.com".to_string(),
            address: "654 Bond Street, London, UK".to_string(),
            due_date: Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 0).unwrap(),
            location: LatLng::new(51.5, -0.1),
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = SelectionTracker::new();
        assert_eq!(ids(&selection.toggle(&rec("1"))), vec!["1"]);
        assert_eq!(ids(&selection.toggle(&rec("2"))), vec!["1", "2"]);
        assert_eq!(ids(&selection.toggle(&rec("1"))), vec!["2"]);
    }

    #[test]
    fn test_toggle_all_fills_partial_page() {
        let page = vec![rec("1"), rec("2"), rec("3")];
        let mut selection = SelectionTracker::new();
        selection.toggle(&rec("2"));
        assert!(selection.is_partially_selected(&page));

        let all = selection.toggle_all(&page);
        assert_eq!(ids(&all), vec!["2", "1", "3"]);
        assert!(selection.is_all_selected(&page));
    }

    #[test]
    fn test_toggle_all_twice_from_empty_is_involution() {
        let page = vec![rec("1"), rec("2")];
        let mut selection = SelectionTracker::new();
        selection.toggle_all(&page);
        assert!(selection.toggle_all(&page).is_empty());
    }

    #[test]
    fn test_toggle_all_twice_from_full_is_involution() {
        let page = vec![rec("1"), rec("2")];
        let mut selection = SelectionTracker::new();
        selection.toggle_all(&page);
        let before = selection.selected();

        selection.toggle_all(&page);
        assert!(selection.is_empty());
        assert_eq!(selection.toggle_all(&page), before);
    }

    #[test]
    fn test_toggle_all_twice_keeps_other_pages() {
        let mut selection = SelectionTracker::new();
        selection.toggle(&rec("11"));
        let first_page = vec![rec("1"), rec("2")];

        selection.toggle_all(&first_page);
        assert_eq!(selection.len(), 3);
        assert_eq!(ids(&selection.toggle_all(&first_page)), vec!["11"]);
    }

    #[test]
    fn test_empty_visible_never_all_selected() {
        let mut selection = SelectionTracker::new();
        assert!(!selection.is_all_selected(&[]));
        assert!(selection.toggle_all(&[]).is_empty());
    }

    #[test]
    fn test_membership_survives_other_pages() {
        let mut selection = SelectionTracker::new();
        selection.toggle(&rec("1"));
        let other_page = vec![rec("11"), rec("12")];
        selection.toggle_all(&other_page);
        assert!(selection.is_selected("1"));
        assert_eq!(selection.len(), 3);
    }
}
