use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DateSpan;

/// Sidebar options: the categorical domains and the date window defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub title: String,
    pub accident_types: Vec<String>,
    pub light_conditions: Vec<String>,
    pub alcohol_values: Vec<String>,
    pub date_span: DateSpan,
    pub default_start_date: NaiveDate,
    /// Exclusive; one day after the last accident so the default selects everything.
    pub default_end_date: NaiveDate,
}

/// Route path for filter options
pub const FILTERS: &str = "/filters";
