//! The four summary views derived from a Filtered View.
//!
//! Sum views are sorted ascending by value (ties by key) for horizontal bar
//! charts; the hourly view is ordered by hour.

use std::collections::{BTreeMap, HashMap};

use crate::api::{AggregationRow, HourlyRow};
use crate::models::{AccidentRecord, Category};

/// Total persons involved per light condition.
pub fn by_light_condition(view: &[&AccidentRecord]) -> Vec<AggregationRow> {
    sum_persons_by(view, AccidentRecord::light_condition)
}

/// Total persons involved per accident type.
pub fn by_accident_type(view: &[&AccidentRecord]) -> Vec<AggregationRow> {
    sum_persons_by(view, AccidentRecord::accident_type)
}

/// Total persons involved per alcohol-related value.
pub fn by_alcohol(view: &[&AccidentRecord]) -> Vec<AggregationRow> {
    sum_persons_by(view, AccidentRecord::alcohol_related)
}

/// Mean persons involved per hour of day, rounded half to even.
///
/// Only hours with at least one accident appear.
pub fn by_hour(view: &[&AccidentRecord]) -> Vec<HourlyRow> {
    let mut totals: BTreeMap<u8, (u64, u64)> = BTreeMap::new();
    for record in view {
        let entry = totals.entry(record.hour()).or_insert((0, 0));
        entry.0 += u64::from(record.total_persons());
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(hour, (sum, count))| HourlyRow {
            hour,
            average: rounded_mean(sum, count),
        })
        .collect()
}

/// Sum of `TotalPersons` over the whole view.
pub fn total_persons(view: &[&AccidentRecord]) -> u64 {
    view.iter().map(|r| u64::from(r.total_persons())).sum()
}

fn sum_persons_by<'a, K>(view: &[&'a AccidentRecord], key: K) -> Vec<AggregationRow>
where
    K: Fn(&'a AccidentRecord) -> &'a Category,
{
    let mut sums: HashMap<&'a str, i64> = HashMap::new();
    for &record in view {
        *sums.entry(key(record).as_str()).or_insert(0) += i64::from(record.total_persons());
    }

    let mut rows: Vec<AggregationRow> = sums
        .into_iter()
        .map(|(key, value)| AggregationRow {
            key: key.to_string(),
            value,
        })
        .collect();
    rows.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.key.cmp(&b.key)));
    rows
}

/// `sum / count` rounded half to even. `count` must be non-zero.
fn rounded_mean(sum: u64, count: u64) -> i64 {
    (sum as f64 / count as f64).round_ties_even() as i64
}
