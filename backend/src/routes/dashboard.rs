use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::io::Dataset;
use crate::models::{AccidentRecord, SelectionCriteria};
use crate::services::selection::SelectionPolicy;

// =========================================================
// Dashboard types + route
// =========================================================

/// One (category, measure) pair of a summed chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRow {
    pub key: String,
    pub value: i64,
}

/// Average persons involved for one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRow {
    pub hour: u8,
    pub average: i64,
}

/// One accident as shown in the data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub accident_id: String,
    pub accident_date: NaiveDate,
    /// `HH.MM.SS`, as in the source file.
    pub accident_time: String,
    pub accident_type: String,
    pub light_condition: String,
    pub alcohol_related: String,
    pub total_persons: u32,
    pub hour: u8,
    pub day_of_week: u8,
}

impl From<&AccidentRecord> for RecordRow {
    fn from(record: &AccidentRecord) -> Self {
        Self {
            accident_id: record.accident_id().to_string(),
            accident_date: record.accident_date(),
            accident_time: record.accident_time().format("%H.%M.%S").to_string(),
            accident_type: record.accident_type().to_string(),
            light_condition: record.light_condition().to_string(),
            alcohol_related: record.alcohol_related().to_string(),
            total_persons: record.total_persons(),
            hour: record.hour(),
            day_of_week: record.day_of_week(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A bar chart ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart<R> {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub orientation: Orientation,
    pub visible: bool,
    pub rows: Vec<R>,
}

/// Which charts the page shows for the current criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartVisibility {
    pub light_condition: bool,
    pub accident_type: bool,
    pub hourly: bool,
    pub alcohol: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryCode {
    StartAfterEnd,
    OutsideDataSpan,
}

/// Non-fatal message about the requested date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub code: AdvisoryCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub light_condition: Chart<AggregationRow>,
    pub accident_type: Chart<AggregationRow>,
    pub hourly: Chart<HourlyRow>,
    pub alcohol: Chart<AggregationRow>,
}

/// Everything one render pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_accidents: usize,
    pub total_persons: u64,
    /// e.g. `Total Accidents: 12,345`
    pub header: String,
    pub policy: SelectionPolicy,
    pub visibility: ChartVisibility,
    pub charts: DashboardCharts,
    pub rows: Vec<RecordRow>,
    pub advisories: Vec<Advisory>,
}

/// Sidebar state sent with each render request.
///
/// Missing dates fall back to the dataset's default window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub accident_types: Vec<String>,
    #[serde(default)]
    pub light_conditions: Vec<String>,
    /// Replaces `light_conditions` with every light condition in the dataset.
    #[serde(default)]
    pub select_all_light_conditions: bool,
    #[serde(default)]
    pub include_alcohol: bool,
}

impl DashboardRequest {
    pub fn to_criteria(&self, dataset: &Dataset) -> SelectionCriteria {
        let span = dataset.span();
        let criteria = SelectionCriteria::new(
            self.start_date.unwrap_or(span.min_date),
            self.end_date.unwrap_or_else(|| span.exclusive_end()),
        )
        .with_types(self.accident_types.iter().cloned())
        .with_alcohol(self.include_alcohol);

        if self.select_all_light_conditions {
            criteria.with_all_light_conditions(dataset.light_conditions())
        } else {
            criteria.with_light_conditions(self.light_conditions.iter().cloned())
        }
    }
}

/// Route path for the dashboard render pass
pub const DASHBOARD: &str = "/dashboard";
