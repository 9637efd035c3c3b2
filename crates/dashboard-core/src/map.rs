//! Map Marker Lifecycle Manager
//!
//! Owns one marker per record with valid coordinates on a `MapSurface`,
//! keeps the selected record across rebuilds, and fits the viewport.

use std::collections::HashMap;

use log::{debug, error, info, warn};

use crate::columns::{marker_icon_class, popup_html};
use crate::config::MapConfig;
use crate::error::{DashboardError, Result};
use crate::record::{LatLng, Record, RecordId};

/// Axis-aligned box in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box holding every point, `None` for no points
    pub fn from_points<I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for p in points {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }
}

/// Capabilities the manager needs from a map provider.
///
/// Markers are owned handles; the manager hands them back for removal.
pub trait MapSurface {
    type Marker;

    /// Rendered height of the container, `None` when it is not in the page
    fn container_height(&self, container_id: &str) -> Option<f64>;

    fn set_container_min_height(&mut self, container_id: &str, px: u32);

    /// Create the map with its tile layer and an empty clustering layer
    fn create_map(&mut self, config: &MapConfig) -> Result<()>;

    fn create_marker(&mut self, position: LatLng, icon_class: &str, popup_html: &str) -> Result<Self::Marker>;

    fn add_to_cluster(&mut self, marker: &Self::Marker);

    fn remove_from_cluster(&mut self, marker: &Self::Marker);

    fn fit_bounds(&mut self, bounds: &Bounds, padding: u32, max_zoom: u8);

    fn set_view(&mut self, center: LatLng, zoom: u8);

    fn open_popup(&mut self, marker: &Self::Marker);

    /// Tear down the map and everything on it
    fn release(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPhase {
    Uninitialized,
    AwaitingRetry,
    Ready,
    Unavailable,
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Ready,
    /// Call `initialize` again after a short deferral
    RetryScheduled,
    Unavailable,
    /// Nothing to do in the current phase
    Settled,
}

/// Result of one marker rebuild
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped_invalid: usize,
    pub failed: usize,
    /// Records sharing an id with one already placed
    pub duplicates: usize,
    /// Held until the surface becomes ready
    pub deferred: bool,
    pub selected: Option<RecordId>,
}

pub struct MarkerManager<S: MapSurface> {
    surface: S,
    config: MapConfig,
    phase: MapPhase,
    records: Vec<Record>,
    markers: HashMap<RecordId, S::Marker>,
    selected: Option<Record>,
}

impl<S: MapSurface> MarkerManager<S> {
    pub fn new(surface: S, config: MapConfig) -> Self {
        Self {
            surface,
            config,
            phase: MapPhase::Uninitialized,
            records: Vec::new(),
            markers: HashMap::new(),
            selected: None,
        }
    }

    pub fn phase(&self) -> MapPhase {
        self.phase
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_marker(&self, id: &str) -> bool {
        self.markers.contains_key(id)
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    /// Bring the surface up. A missing or collapsed container gets a
    /// minimum height and one retry; a second failure leaves the map empty.
    pub fn initialize(&mut self) -> InitOutcome {
        if !matches!(self.phase, MapPhase::Uninitialized | MapPhase::AwaitingRetry) {
            return InitOutcome::Settled;
        }

        match self.try_create() {
            Ok(()) => {
                info!("Map surface ready in #{}", self.config.container_id);
                self.phase = MapPhase::Ready;
                if !self.records.is_empty() {
                    self.rebuild();
                }
                InitOutcome::Ready
            }
            Err(err) if self.phase == MapPhase::Uninitialized => {
                warn!("{}; retrying once", err);
                self.phase = MapPhase::AwaitingRetry;
                InitOutcome::RetryScheduled
            }
            Err(err) => {
                error!("{}; leaving map empty", err);
                self.phase = MapPhase::Unavailable;
                InitOutcome::Unavailable
            }
        }
    }

    fn try_create(&mut self) -> Result<()> {
        let id = self.config.container_id.clone();
        match self.surface.container_height(&id) {
            None => Err(DashboardError::MapUnavailable(format!("container #{} not found", id))),
            Some(height) if height <= 0.0 => {
                self.surface
                    .set_container_min_height(&id, self.config.min_container_height);
                Err(DashboardError::MapUnavailable(format!("container #{} has zero height", id)))
            }
            Some(_) => self.surface.create_map(&self.config),
        }
    }

    /// Replace the record set and rebuild every marker
    pub fn set_records(&mut self, records: Vec<Record>) -> RenderSummary {
        if self.phase == MapPhase::Disposed {
            return RenderSummary::default();
        }
        self.records = records;
        if self.phase != MapPhase::Ready {
            debug!("Map not ready, holding {} records", self.records.len());
            return RenderSummary {
                deferred: true,
                ..Default::default()
            };
        }
        self.rebuild()
    }

    fn rebuild(&mut self) -> RenderSummary {
        self.clear_markers();

        let mut summary = RenderSummary::default();
        let mut placed = Vec::new();
        for record in &self.records {
            if !record.has_valid_location() {
                let err = DashboardError::InvalidCoordinates {
                    id: record.id.clone(),
                    lat: record.location.lat,
                    lng: record.location.lng,
                };
                warn!("Skipping marker: {}", err);
                summary.skipped_invalid += 1;
                continue;
            }
            if self.markers.contains_key(&record.id) {
                warn!("Skipping duplicate marker for record {}", record.id);
                summary.duplicates += 1;
                continue;
            }
            let marker = self.surface.create_marker(
                record.location,
                &marker_icon_class(record),
                &popup_html(record),
            );
            match marker {
                Ok(marker) => {
                    self.surface.add_to_cluster(&marker);
                    self.markers.insert(record.id.clone(), marker);
                    placed.push(record.location);
                }
                Err(err) => {
                    warn!("Skipping marker for record {}: {}", record.id, err);
                    summary.failed += 1;
                }
            }
        }
        summary.rendered = self.markers.len();

        if let Some(bounds) = Bounds::from_points(placed) {
            self.surface
                .fit_bounds(&bounds, self.config.fit_padding, self.config.fit_max_zoom);
        }

        let previous = self.selected.take();
        if let Some(previous) = previous {
            let current = self.records.iter().find(|r| r.id == previous.id).cloned();
            if let Some(current) = current {
                if self.select(&current) {
                    summary.selected = Some(current.id);
                }
            }
        }
        debug!(
            "Rendered {} markers ({} invalid, {} failed)",
            summary.rendered, summary.skipped_invalid, summary.failed
        );
        summary
    }

    /// Focus a record's marker and open its popup. `false` when the record
    /// has no marker.
    pub fn select(&mut self, record: &Record) -> bool {
        if self.phase != MapPhase::Ready {
            return false;
        }
        let Some(marker) = self.markers.get(&record.id) else {
            debug!("No marker for record {}, ignoring selection", record.id);
            return false;
        };
        self.surface.set_view(record.location, self.config.fit_max_zoom);
        self.surface.open_popup(marker);
        self.selected = Some(record.clone());
        true
    }

    /// Release the surface and every marker; later calls are no-ops
    pub fn dispose(&mut self) {
        if self.phase == MapPhase::Disposed {
            return;
        }
        self.clear_markers();
        if self.phase == MapPhase::Ready {
            self.surface.release();
        }
        self.records.clear();
        self.selected = None;
        self.phase = MapPhase::Disposed;
    }

    fn clear_markers(&mut self) {
        for (_, marker) in self.markers.drain() {
            self.surface.remove_from_cluster(&marker);
        }
    }
}
