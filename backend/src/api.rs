//! Public API surface for the crash statistics backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::dashboard::Advisory;
pub use crate::routes::dashboard::AdvisoryCode;
pub use crate::routes::dashboard::AggregationRow;
pub use crate::routes::dashboard::Chart;
pub use crate::routes::dashboard::ChartVisibility;
pub use crate::routes::dashboard::DashboardCharts;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::DashboardRequest;
pub use crate::routes::dashboard::HourlyRow;
pub use crate::routes::dashboard::Orientation;
pub use crate::routes::dashboard::RecordRow;
pub use crate::routes::filters::FilterOptions;

pub use crate::models::DateSpan;
pub use crate::services::selection::SelectionPolicy;
