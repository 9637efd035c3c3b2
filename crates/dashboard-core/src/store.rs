//! Record Store
//!
//! Authoritative in-memory collection and the provider contract the
//! orchestrator queries through.

use log::info;

use crate::error::{DashboardError, Result};
use crate::filter::FilterCriteria;
use crate::record::{Record, Status};

/// Source of filtered record sets.
///
/// Each call returns the full filtered projection; there is no delta protocol.
pub trait RecordProvider {
    fn query(&self, criteria: &FilterCriteria) -> Result<Vec<Record>>;

    /// Export every record, returning how many were exported
    fn export_all(&self) -> Result<usize>;

    /// Distinct task values for the category filter
    fn category_options(&self) -> Vec<String>;

    fn status_options(&self) -> Vec<Status> {
        Status::ALL.to_vec()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Swap in a whole new collection
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching every active criterion, in insertion order
    pub fn query(&self, criteria: &FilterCriteria) -> Vec<Record> {
        if criteria.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect()
    }

    /// Distinct tasks in first-seen order
    pub fn category_options(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.task) {
                seen.push(record.task.clone());
            }
        }
        seen
    }

    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.records).map_err(|e| DashboardError::Export(e.to_string()))
    }
}

impl RecordProvider for RecordStore {
    fn query(&self, criteria: &FilterCriteria) -> Result<Vec<Record>> {
        Ok(RecordStore::query(self, criteria))
    }

    fn export_all(&self) -> Result<usize> {
        let payload = self.export_json()?;
        info!("Exported {} submissions ({} bytes)", self.records.len(), payload.len());
        Ok(self.records.len())
    }

    fn category_options(&self) -> Vec<String> {
        RecordStore::category_options(self)
    }
}
