use log::warn;

use crate::api::{Advisory, AdvisoryCode};
use crate::models::{DateSpan, SelectionCriteria};

pub const START_AFTER_END_MESSAGE: &str = "The start date must come before the end date";
pub const OUTSIDE_DATA_SPAN_MESSAGE: &str = "There is no data in between these dates";

/// Warnings about the requested date window against the dataset's span.
///
/// A reversed window only reports `StartAfterEnd`; otherwise a window that
/// shares no day with `span` reports `OutsideDataSpan`.
pub fn date_advisories(criteria: &SelectionCriteria, span: &DateSpan) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if criteria.start_date > criteria.end_date {
        advisories.push(Advisory {
            code: AdvisoryCode::StartAfterEnd,
            message: START_AFTER_END_MESSAGE.to_string(),
        });
    } else if !span.intersects(criteria.start_date, criteria.end_date) {
        advisories.push(Advisory {
            code: AdvisoryCode::OutsideDataSpan,
            message: OUTSIDE_DATA_SPAN_MESSAGE.to_string(),
        });
    }

    for advisory in &advisories {
        warn!(
            "{} (requested {} to {}, data {} to {})",
            advisory.message, criteria.start_date, criteria.end_date, span.min_date, span.max_date
        );
    }
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn span() -> DateSpan {
        DateSpan::new(d(2013, 1, 7), d(2019, 12, 3))
    }

    fn codes(start: NaiveDate, end: NaiveDate) -> Vec<AdvisoryCode> {
        date_advisories(&SelectionCriteria::new(start, end), &span())
            .into_iter()
            .map(|a| a.code)
            .collect()
    }

    #[test]
    fn test_valid_window_has_no_advisories() {
        assert!(codes(d(2013, 1, 7), d(2019, 12, 4)).is_empty());
        assert!(codes(d(2010, 1, 1), d(2013, 1, 8)).is_empty());
    }

    #[test]
    fn test_start_after_end() {
        assert_eq!(
            codes(d(2015, 1, 2), d(2015, 1, 1)),
            vec![AdvisoryCode::StartAfterEnd]
        );
    }

    #[test]
    fn test_window_before_data() {
        assert_eq!(
            codes(d(2010, 1, 1), d(2013, 1, 7)),
            vec![AdvisoryCode::OutsideDataSpan]
        );
    }

    #[test]
    fn test_window_after_data() {
        assert_eq!(
            codes(d(2019, 12, 4), d(2020, 6, 1)),
            vec![AdvisoryCode::OutsideDataSpan]
        );
    }

    #[test]
    fn test_empty_window_inside_span() {
        assert_eq!(
            codes(d(2014, 5, 2), d(2014, 5, 2)),
            vec![AdvisoryCode::OutsideDataSpan]
        );
    }

    #[test]
    fn test_message_text() {
        let advisories =
            date_advisories(&SelectionCriteria::new(d(2015, 1, 2), d(2015, 1, 1)), &span());
        assert_eq!(advisories[0].message, START_AFTER_END_MESSAGE);
    }
}
