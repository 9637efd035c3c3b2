//! Browser Record Provider
//!
//! Seeded in-memory store whose export hands the JSON to the browser as a
//! download.

use chrono::Utc;
use log::info;

use dashboard_core::{seed, DashboardConfig, DashboardError, FilterCriteria, Record, RecordProvider, RecordStore};

use crate::bindings::download_text;

pub const EXPORT_FILE_NAME: &str = "submissions.json";

pub struct BrowserProvider {
    store: RecordStore,
    seed_count: usize,
}

impl BrowserProvider {
    /// Provider over freshly seeded records
    pub fn seeded(config: &DashboardConfig) -> Self {
        let mut provider = Self {
            store: RecordStore::default(),
            seed_count: config.seed_count,
        };
        provider.reseed(config.seed);
        provider
    }

    /// Replace every record with a batch generated from `seed`
    pub fn reseed(&mut self, seed: u64) -> usize {
        self.store.replace(seed::generate(self.seed_count, seed, Utc::now()));
        info!("Seeded {} submissions", self.store.len());
        self.store.len()
    }
}

impl RecordProvider for BrowserProvider {
    fn query(&self, criteria: &FilterCriteria) -> dashboard_core::Result<Vec<Record>> {
        Ok(self.store.query(criteria))
    }

    fn export_all(&self) -> dashboard_core::Result<usize> {
        let payload = self.store.export_json()?;
        download_text(EXPORT_FILE_NAME, "application/json", &payload).map_err(DashboardError::Export)?;
        Ok(self.store.len())
    }

    fn category_options(&self) -> Vec<String> {
        self.store.category_options()
    }
}
