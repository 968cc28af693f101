use log::debug;

use super::advisories::date_advisories;
use super::aggregation::{by_accident_type, by_alcohol, by_hour, by_light_condition, total_persons};
use super::selection::{select, SelectionPolicy};
use super::visibility::chart_visibility;
use crate::api::{
    Chart, DashboardCharts, DashboardData, FilterOptions, Orientation, RecordRow,
};
use crate::io::Dataset;
use crate::models::SelectionCriteria;

pub const LIGHT_CONDITION_TITLE: &str = "Light Condition Chart";
pub const ACCIDENT_TYPE_TITLE: &str = "Accident Type Chart";
pub const HOURLY_TITLE: &str = "Accidents per Hour";
pub const ALCOHOL_TITLE: &str = "Alcohol Involved in Accident";

const HOURLY_X_LABEL: &str = "Hour of Day (Midnight = 0)";
const HOURLY_Y_LABEL: &str = "Average Number of Accidents";
const TOTAL_PERSONS_LABEL: &str = "TOTAL_PERSONS";

/// Run one render pass: select, aggregate, decide visibility, check dates.
///
/// Reads `dataset` only; every call builds its own view and rows.
pub fn render(dataset: &Dataset, criteria: &SelectionCriteria) -> DashboardData {
    let policy = SelectionPolicy::resolve(criteria);
    let view = select(dataset.records(), criteria);
    let visibility = chart_visibility(criteria);
    let advisories = date_advisories(criteria, &dataset.span());

    let charts = DashboardCharts {
        light_condition: horizontal(
            LIGHT_CONDITION_TITLE,
            "LIGHT_CONDITION",
            visibility.light_condition,
            by_light_condition(&view),
        ),
        accident_type: horizontal(
            ACCIDENT_TYPE_TITLE,
            "ACCIDENT_TYPE",
            visibility.accident_type,
            by_accident_type(&view),
        ),
        hourly: Chart {
            title: HOURLY_TITLE.to_string(),
            x_label: HOURLY_X_LABEL.to_string(),
            y_label: HOURLY_Y_LABEL.to_string(),
            orientation: Orientation::Vertical,
            visible: visibility.hourly,
            rows: by_hour(&view),
        },
        alcohol: horizontal(
            ALCOHOL_TITLE,
            "ALCOHOL_RELATED",
            visibility.alcohol,
            by_alcohol(&view),
        ),
    };

    let total_accidents = view.len();
    debug!(
        "Rendered dashboard: {} accidents, {:?}, {} advisories",
        total_accidents,
        visibility,
        advisories.len()
    );

    DashboardData {
        total_accidents,
        total_persons: total_persons(&view),
        header: total_accidents_header(total_accidents),
        policy,
        visibility,
        charts,
        rows: view.into_iter().map(RecordRow::from).collect(),
        advisories,
    }
}

/// Sidebar options for `dataset`.
pub fn filter_options(dataset: &Dataset, title: &str) -> FilterOptions {
    let span = dataset.span();
    FilterOptions {
        title: title.to_string(),
        accident_types: dataset.accident_types().to_strings(),
        light_conditions: dataset.light_conditions().to_strings(),
        alcohol_values: dataset.alcohol_values().to_strings(),
        date_span: span,
        default_start_date: span.min_date,
        default_end_date: span.exclusive_end(),
    }
}

/// `Total Accidents: 12,345`
pub fn total_accidents_header(count: usize) -> String {
    format!("Total Accidents: {}", format_thousands(count))
}

/// Format `n` with `,` between groups of three digits.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn horizontal<R>(title: &str, category: &str, visible: bool, rows: Vec<R>) -> Chart<R> {
    Chart {
        title: title.to_string(),
        x_label: TOTAL_PERSONS_LABEL.to_string(),
        y_label: category.to_string(),
        orientation: Orientation::Horizontal,
        visible,
        rows,
    }
}
