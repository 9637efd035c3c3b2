//! Filter State
//!
//! Current filter criteria plus the active view mode.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::record::{Record, Status};

/// Which presentation is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

/// Active predicates. `None` means the dimension is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub status: Option<Status>,
    pub date_threshold: Option<NaiveDate>,
    pub search_text: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.status.is_none()
            && self.date_threshold.is_none()
            && self.search_text.is_none()
    }

    /// Conjunction of every active predicate
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(category) = &self.category {
            if record.task != *category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(threshold) = self.date_threshold {
            if record.due_day() < threshold {
                return false;
            }
        }
        if let Some(needle) = &self.search_text {
            if !record.search_haystack().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// One field-level edit coming from the filter bar
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Category(Option<String>),
    Status(Option<String>),
    DateThreshold(Option<NaiveDate>),
    SearchText(String),
    Clear,
}

/// Criteria plus view mode, mutated field by field
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    criteria: FilterCriteria,
    view: ViewMode,
}

impl FilterState {
    pub fn new(view: ViewMode) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            view,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Returns whether the view actually changed
    pub fn set_view(&mut self, view: ViewMode) -> bool {
        let changed = self.view != view;
        self.view = view;
        changed
    }

    /// Apply one edit. Empty strings deactivate their criterion and an
    /// unknown status label resets the status criterion.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Category(category) => {
                self.criteria.category = non_blank(category);
            }
            FilterUpdate::Status(label) => {
                self.criteria.status = non_blank(label).and_then(|label| match label.parse() {
                    Ok(status) => Some(status),
                    Err(err) => {
                        warn!("Ignoring status filter: {}", err);
                        None
                    }
                });
            }
            FilterUpdate::DateThreshold(date) => {
                self.criteria.date_threshold = date;
            }
            FilterUpdate::SearchText(text) => {
                self.criteria.search_text = non_blank(Some(text));
            }
            FilterUpdate::Clear => {
                self.criteria = FilterCriteria::default();
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_deactivate() {
        let mut state = FilterState::default();
        state.apply(FilterUpdate::Category(Some("Work Flow:Site Inspection".into())));
        state.apply(FilterUpdate::SearchText("london".into()));
        assert!(!state.criteria().is_empty());

        state.apply(FilterUpdate::Category(Some(String::new())));
        state.apply(FilterUpdate::SearchText("   ".into()));
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn test_status_parsing() {
        let mut state = FilterState::default();
        state.apply(FilterUpdate::Status(Some("Low Risk".into())));
        assert_eq!(state.criteria().status, Some(Status::LowRisk));

        state.apply(FilterUpdate::Status(Some("All Status".into())));
        assert_eq!(state.criteria().status, None);
    }

    #[test]
    fn test_clear_keeps_view() {
        let mut state = FilterState::new(ViewMode::List);
        state.apply(FilterUpdate::DateThreshold(NaiveDate::from_ymd_opt(2024, 1, 1)));
        state.apply(FilterUpdate::Clear);
        assert!(state.criteria().is_empty());
        assert_eq!(state.view(), ViewMode::List);
    }

    #[test]
    fn test_set_view_reports_change() {
        let mut state = FilterState::default();
        assert!(!state.set_view(ViewMode::Map));
        assert!(state.set_view(ViewMode::List));
    }
}
