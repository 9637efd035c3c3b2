//! Error types for the dashboard pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid coordinates for record {id}: ({lat}, {lng})")]
    InvalidCoordinates { id: String, lat: f64, lng: f64 },

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Map surface unavailable: {0}")]
    MapUnavailable(String),

    #[error("Marker creation failed for record {id}: {reason}")]
    MarkerCreation { id: String, reason: String },

    #[error("Record provider error: {0}")]
    Provider(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
