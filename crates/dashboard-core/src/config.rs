//! Dashboard Configuration
//!
//! Every field has a default; a JSON document only needs the overrides.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::filter::ViewMode;
use crate::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::record::LatLng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Number of seeded submissions
    pub seed_count: usize,
    pub seed: u64,
    pub default_view: ViewMode,
    pub search_debounce_ms: u32,
    pub log_capacity: usize,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub map: MapConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            seed_count: 100,
            seed: 20240101,
            default_view: ViewMode::Map,
            search_debounce_ms: 150,
            log_capacity: 500,
            log_level: "info".to_string(),
            map: MapConfig::default(),
        }
    }
}

/// Map surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub tile_max_zoom: u8,
    /// Padding in px around fitted bounds
    pub fit_padding: u32,
    /// Zoom ceiling for fitted bounds and focused markers
    pub fit_max_zoom: u8,
    /// Delay before the first geometry-dependent initialization
    pub init_delay_ms: u32,
    /// Height applied to a zero-height container before the retry
    pub min_container_height: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            center: LatLng::new(51.505, -0.09),
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            tile_max_zoom: 19,
            fit_padding: 40,
            fit_max_zoom: 16,
            init_delay_ms: 100,
            min_container_height: 400,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size_options.contains(&0) {
            return Err(DashboardError::InvalidPageSize);
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "page_size": 20, "map": { "zoom": 11 } }"#).unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.map.zoom, 11);
        assert_eq!(config.map.container_id, "map");
        assert_eq!(config.seed_count, 100);
        assert_eq!(config.default_view, ViewMode::Map);
    }

    #[test]
    fn test_view_mode_names() {
        let config = DashboardConfig::from_json(r#"{ "default_view": "list" }"#).unwrap();
        assert_eq!(config.default_view, ViewMode::List);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "page_size": 0 }"#),
            Err(DashboardError::InvalidPageSize)
        ));
        assert!(matches!(
            DashboardConfig::from_json("{ not json"),
            Err(DashboardError::Config(_))
        ));
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
