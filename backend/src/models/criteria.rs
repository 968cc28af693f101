use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::category::CategoryDomain;

/// Inclusive range of accident dates present in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl DateSpan {
    pub fn new(min_date: NaiveDate, max_date: NaiveDate) -> Self {
        Self { min_date, max_date }
    }

    /// Smallest span covering every date yielded, or `None` for no dates.
    pub fn covering(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        dates.into_iter().fold(None, |span, date| match span {
            None => Some(Self::new(date, date)),
            Some(s) => Some(Self::new(s.min_date.min(date), s.max_date.max(date))),
        })
    }

    /// Exclusive end date that selects the whole span.
    pub fn exclusive_end(&self) -> NaiveDate {
        self.max_date
            .checked_add_days(Days::new(1))
            .unwrap_or(self.max_date)
    }

    /// Whether the half-open range `[start, end)` shares at least one day
    /// with this span.
    pub fn intersects(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start < end && end > self.min_date && start <= self.max_date
    }
}

/// User-chosen filter parameters for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    /// First date included.
    pub start_date: NaiveDate,
    /// First date excluded.
    pub end_date: NaiveDate,
    pub accepted_types: BTreeSet<String>,
    pub accepted_light_conditions: BTreeSet<String>,
    /// Only controls whether the alcohol chart is shown.
    pub include_alcohol: bool,
}

impl SelectionCriteria {
    /// Criteria with the given window and no category filters.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            accepted_types: BTreeSet::new(),
            accepted_light_conditions: BTreeSet::new(),
            include_alcohol: false,
        }
    }

    /// Criteria selecting the whole span with no category filters.
    pub fn for_span(span: &DateSpan) -> Self {
        Self::new(span.min_date, span.exclusive_end())
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_light_conditions<I, S>(mut self, lights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_light_conditions = lights.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the accepted light conditions with every value in `domain`.
    pub fn with_all_light_conditions(mut self, domain: &CategoryDomain) -> Self {
        self.accepted_light_conditions = domain.to_strings().into_iter().collect();
        self
    }

    pub fn with_alcohol(mut self, include_alcohol: bool) -> Self {
        self.include_alcohol = include_alcohol;
        self
    }

    /// Date predicate: `start_date <= date < end_date`.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_contains_date_half_open() {
        let c = SelectionCriteria::new(d(2014, 5, 1), d(2014, 5, 3));
        assert!(c.contains_date(d(2014, 5, 1)));
        assert!(c.contains_date(d(2014, 5, 2)));
        assert!(!c.contains_date(d(2014, 5, 3)));
        assert!(!c.contains_date(d(2014, 4, 30)));
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let c = SelectionCriteria::new(d(2014, 5, 2), d(2014, 5, 2));
        assert!(!c.contains_date(d(2014, 5, 2)));
    }

    #[test]
    fn test_span_covering() {
        let span = DateSpan::covering([d(2015, 1, 1), d(2013, 1, 7), d(2019, 12, 3)]).unwrap();
        assert_eq!(span.min_date, d(2013, 1, 7));
        assert_eq!(span.max_date, d(2019, 12, 3));
        assert_eq!(span.exclusive_end(), d(2019, 12, 4));
        assert!(DateSpan::covering(Vec::new()).is_none());
    }

    #[test]
    fn test_span_intersects() {
        let span = DateSpan::new(d(2013, 1, 7), d(2019, 12, 3));
        assert!(span.intersects(d(2013, 1, 1), d(2013, 1, 8)));
        assert!(span.intersects(d(2019, 12, 3), d(2020, 1, 1)));
        assert!(!span.intersects(d(2012, 1, 1), d(2013, 1, 7)));
        assert!(!span.intersects(d(2019, 12, 4), d(2020, 1, 1)));
        assert!(!span.intersects(d(2015, 1, 1), d(2014, 1, 1)));
    }

    #[test]
    fn test_select_all_light_conditions() {
        let mut domain = CategoryDomain::new();
        domain.intern("Day");
        domain.intern("Dark No street lights");
        let c = SelectionCriteria::new(d(2014, 1, 1), d(2015, 1, 1))
            .with_light_conditions(["Day"])
            .with_all_light_conditions(&domain);
        assert_eq!(c.accepted_light_conditions.len(), 2);
        assert!(c.accepted_light_conditions.contains("Dark No street lights"));
    }
}
