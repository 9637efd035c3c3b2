//! Submissions Dashboard Core
//!
//! Filter state, record queries, list pagination, selection and map marker
//! lifecycle, glued together by the view orchestrator. Nothing here touches
//! the DOM; the map is reached through the `MapSurface` trait.

pub mod columns;
pub mod config;
pub mod error;
pub mod filter;
pub mod map;
pub mod orchestrator;
pub mod pagination;
pub mod record;
pub mod seed;
pub mod selection;
pub mod store;

#[cfg(test)]
mod testing;
mod tests;

pub use columns::{CellRenderer, Column, DisplayValue};
pub use config::{DashboardConfig, MapConfig};
pub use error::{DashboardError, Result};
pub use filter::{FilterCriteria, FilterState, FilterUpdate, ViewMode};
pub use map::{Bounds, InitOutcome, MapPhase, MapSurface, MarkerManager, RenderSummary};
pub use orchestrator::{ExportStatus, Orchestrator, QueryRequest, Resolution, ViewSwitch, ViewUpdate};
pub use pagination::{ListProjection, PageChanged, PageTurn, PageView, PagerItem};
pub use record::{LatLng, Record, RecordId, Status};
pub use selection::SelectionTracker;
pub use store::{RecordProvider, RecordStore};
