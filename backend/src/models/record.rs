use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use super::category::Category;

/// One accident entry from the source dataset.
///
/// `hour` and `day_of_week` are derived once in [`AccidentRecord::new`] and
/// cannot be set independently of the date and time they come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccidentRecord {
    accident_id: String,
    accident_date: NaiveDate,
    accident_time: NaiveTime,
    accident_type: Category,
    light_condition: Category,
    alcohol_related: Category,
    total_persons: u32,
    hour: u8,
    day_of_week: u8,
}

impl AccidentRecord {
    pub fn new(
        accident_id: impl Into<String>,
        accident_date: NaiveDate,
        accident_time: NaiveTime,
        accident_type: Category,
        light_condition: Category,
        alcohol_related: Category,
        total_persons: u32,
    ) -> Self {
        Self {
            accident_id: accident_id.into(),
            accident_date,
            accident_time,
            accident_type,
            light_condition,
            alcohol_related,
            total_persons,
            hour: accident_time.hour() as u8,
            day_of_week: accident_date.weekday().num_days_from_monday() as u8,
        }
    }

    pub fn accident_id(&self) -> &str {
        &self.accident_id
    }

    pub fn accident_date(&self) -> NaiveDate {
        self.accident_date
    }

    pub fn accident_time(&self) -> NaiveTime {
        self.accident_time
    }

    pub fn accident_type(&self) -> &Category {
        &self.accident_type
    }

    pub fn light_condition(&self) -> &Category {
        &self.light_condition
    }

    pub fn alcohol_related(&self) -> &Category {
        &self.alcohol_related
    }

    pub fn total_persons(&self) -> u32 {
        self.total_persons
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// ISO weekday index, 0 = Monday through 6 = Sunday.
    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }
}
