use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{AccidentRecord, SelectionCriteria};

/// Which predicates a render pass applies besides the date window.
///
/// | accident types | light conditions | policy |
/// |---|---|---|
/// | empty | empty | `DateOnly` |
/// | empty | chosen | `LightAndDate` |
/// | chosen | empty | `DateOnly` |
/// | chosen | chosen | `LightTypeAndDate` |
///
/// An empty set never means "accept nothing". Choosing accident types without
/// light conditions does not narrow the rows; the type choice then only
/// affects which charts are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    DateOnly,
    LightAndDate,
    LightTypeAndDate,
}

impl SelectionPolicy {
    pub fn resolve(criteria: &SelectionCriteria) -> Self {
        match (
            criteria.accepted_types.is_empty(),
            criteria.accepted_light_conditions.is_empty(),
        ) {
            (true, true) => SelectionPolicy::DateOnly,
            (true, false) => SelectionPolicy::LightAndDate,
            (false, true) => SelectionPolicy::DateOnly,
            (false, false) => SelectionPolicy::LightTypeAndDate,
        }
    }

    /// Whether `record` passes every predicate this policy applies.
    pub fn matches(&self, record: &AccidentRecord, criteria: &SelectionCriteria) -> bool {
        if !criteria.contains_date(record.accident_date()) {
            return false;
        }
        let light_ok = || {
            criteria
                .accepted_light_conditions
                .contains(record.light_condition().as_str())
        };
        let type_ok = || {
            criteria
                .accepted_types
                .contains(record.accident_type().as_str())
        };

        match self {
            SelectionPolicy::DateOnly => true,
            SelectionPolicy::LightAndDate => light_ok(),
            SelectionPolicy::LightTypeAndDate => light_ok() && type_ok(),
        }
    }
}

/// Build the Filtered View: the records matching `criteria`, in source order.
pub fn select<'a>(
    records: &'a [AccidentRecord],
    criteria: &SelectionCriteria,
) -> Vec<&'a AccidentRecord> {
    let policy = SelectionPolicy::resolve(criteria);
    let view: Vec<&AccidentRecord> = records
        .iter()
        .filter(|r| policy.matches(r, criteria))
        .collect();

    debug!(
        "Selected {} of {} accidents ({:?}, {} to {})",
        view.len(),
        records.len(),
        policy,
        criteria.start_date,
        criteria.end_date
    );
    view
}
