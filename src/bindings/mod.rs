//! Browser Bindings
//!
//! JS interop the dashboard needs, organized by concern.

mod download;
mod leaflet;

pub use download::*;
pub use leaflet::*;
