//! Data Transfer Objects for the HTTP API.
//!
//! The dashboard DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Dashboard
    Advisory, AdvisoryCode, AggregationRow, Chart, ChartVisibility, DashboardCharts,
    DashboardData, DashboardRequest, HourlyRow, Orientation, RecordRow,
    // Filters
    DateSpan, FilterOptions,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Loaded dataset summary
    pub dataset: DatasetSummary,
}

/// What was loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    /// SHA-256 of the source file
    pub checksum: String,
    pub source: String,
}
