use crate::api::ChartVisibility;
use crate::models::SelectionCriteria;

const fn shown(
    light_condition: bool,
    accident_type: bool,
    hourly: bool,
    alcohol: bool,
) -> ChartVisibility {
    ChartVisibility {
        light_condition,
        accident_type,
        hourly,
        alcohol,
    }
}

/// `(types chosen, light conditions chosen, include alcohol)` to the charts shown.
///
/// The light chart needs a light-condition choice; the type and hourly charts
/// need a type choice; the alcohol chart needs the flag and any category
/// choice. With nothing chosen no chart is shown.
pub const VISIBILITY_TABLE: [((bool, bool, bool), ChartVisibility); 8] = [
    ((false, false, false), shown(false, false, false, false)),
    ((false, false, true), shown(false, false, false, false)),
    ((false, true, false), shown(true, false, false, false)),
    ((false, true, true), shown(true, false, false, true)),
    ((true, false, false), shown(false, true, true, false)),
    ((true, false, true), shown(false, true, true, true)),
    ((true, true, false), shown(true, true, true, false)),
    ((true, true, true), shown(true, true, true, true)),
];

/// Look up the charts to show for `criteria`.
///
/// Call this after any "select all light conditions" expansion so the flag
/// reflects what was actually selected.
pub fn chart_visibility(criteria: &SelectionCriteria) -> ChartVisibility {
    let flags = (
        !criteria.accepted_types.is_empty(),
        !criteria.accepted_light_conditions.is_empty(),
        criteria.include_alcohol,
    );
    VISIBILITY_TABLE
        .iter()
        .find(|(key, _)| *key == flags)
        .map(|(_, visibility)| *visibility)
        .unwrap_or_default()
}
