//! Submission Records
//!
//! Closed, strongly-typed record schema shared by every view.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stable record identity
pub type RecordId = String;

/// Submission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Incomplete,
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Needs Review")]
    NeedsReview,
    Complete,
    Unassigned,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Incomplete,
        Status::LowRisk,
        Status::NeedsReview,
        Status::Complete,
        Status::Unassigned,
    ];

    /// Display label, also used for filtering and search
    pub fn label(self) -> &'static str {
        match self {
            Status::Incomplete => "Incomplete",
            Status::LowRisk => "Low Risk",
            Status::NeedsReview => "Needs Review",
            Status::Complete => "Complete",
            Status::Unassigned => "Unassigned",
        }
    }

    /// CSS class slug (`status-<slug>` on badges and markers)
    pub fn slug(self) -> &'static str {
        match self {
            Status::Incomplete => "incomplete",
            Status::LowRisk => "low-risk",
            Status::NeedsReview => "needs-review",
            Status::Complete => "complete",
            Status::Unassigned => "unassigned",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status '{}'", self.0)
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite, within range, and not the `(0, 0)` placeholder pair
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
            && !(self.lat == 0.0 && self.lng == 0.0)
    }
}

/// One submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub task: String,
    pub status: Status,
    pub from: String,
    pub to: String,
    #[serde(alias = "customerAddress")]
    pub address: String,
    pub due_date: DateTime<Utc>,
    pub location: LatLng,
}

impl Record {
    /// Due date rendered for humans, e.g. `Oct 6, 02:38 AM` (UTC)
    pub fn due_date_display(&self) -> String {
        format_due_date(&self.due_date)
    }

    pub fn due_day(&self) -> NaiveDate {
        self.due_date.date_naive()
    }

    pub fn has_valid_location(&self) -> bool {
        self.location.is_valid()
    }

    /// Lower-cased text the free-text search runs against
    pub fn search_haystack(&self) -> String {
        [
            self.task.as_str(),
            self.status.label(),
            self.from.as_str(),
            self.to.as_str(),
            self.address.as_str(),
            &self.due_date_display(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

pub fn format_due_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %I:%M %p").to_string()
}
