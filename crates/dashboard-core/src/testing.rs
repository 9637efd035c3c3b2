//! Test doubles shared by the unit tests.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};

use crate::config::MapConfig;
use crate::error::{DashboardError, Result};
use crate::map::{Bounds, MapSurface};
use crate::record::{LatLng, Record, Status};

pub fn record_at(id: &str, lat: f64, lng: f64) -> Record {
    Record {
        id: id.to_string(),
        task: "Work Flow:Delivery Confirmation".to_string(),
        status: Status::Incomplete,
        from: "emily.johnson@example.com".to_string(),
        to: "michael.wong@example.com".to_string(),
        address: "456 Oxford Street, London, UK".to_string(),
        due_date: Utc.with_ymd_and_hms(2024, 7, 1, 10, 30, 0).unwrap(),
        location: LatLng::new(lat, lng),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    MinHeight(u32),
    CreateMap,
    FitBounds(Bounds, u32, u8),
    SetView(LatLng, u8),
    OpenPopup(u32),
    Release,
}

/// In-memory map surface recording every call
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub height: Option<f64>,
    /// Whether applying a minimum height makes the container usable
    pub grow_on_min_height: bool,
    pub events: Vec<SurfaceEvent>,
    cluster: HashSet<u32>,
    poisoned: Vec<LatLng>,
    next_marker: u32,
}

impl FakeSurface {
    pub fn with_height(height: f64) -> Self {
        Self {
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    /// Make marker creation fail at `position`
    pub fn poison(&mut self, position: LatLng) {
        self.poisoned.push(position);
    }

    pub fn live_markers(&self) -> usize {
        self.cluster.len()
    }
}

impl MapSurface for FakeSurface {
    type Marker = u32;

    fn container_height(&self, _container_id: &str) -> Option<f64> {
        self.height
    }

    fn set_container_min_height(&mut self, _container_id: &str, px: u32) {
        self.events.push(SurfaceEvent::MinHeight(px));
        if self.grow_on_min_height {
            self.height = Some(px as f64);
        }
    }

    fn create_map(&mut self, _config: &MapConfig) -> Result<()> {
        self.events.push(SurfaceEvent::CreateMap);
        Ok(())
    }

    fn create_marker(&mut self, position: LatLng, _icon_class: &str, _popup_html: &str) -> Result<u32> {
        if self.poisoned.contains(&position) {
            return Err(DashboardError::MarkerCreation {
                id: format!("{:?}", position),
                reason: "poisoned position".to_string(),
            });
        }
        self.next_marker += 1;
        Ok(self.next_marker)
    }

    fn add_to_cluster(&mut self, marker: &u32) {
        self.cluster.insert(*marker);
    }

    fn remove_from_cluster(&mut self, marker: &u32) {
        self.cluster.remove(marker);
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding: u32, max_zoom: u8) {
        self.events.push(SurfaceEvent::FitBounds(*bounds, padding, max_zoom));
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.events.push(SurfaceEvent::SetView(center, zoom));
    }

    fn open_popup(&mut self, marker: &u32) {
        self.events.push(SurfaceEvent::OpenPopup(*marker));
    }

    fn release(&mut self) {
        self.cluster.clear();
        self.events.push(SurfaceEvent::Release);
    }
}
