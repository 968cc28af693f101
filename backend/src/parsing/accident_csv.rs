use polars::prelude::*;
use std::io::Cursor;

use super::datetime::{parse_accident_date, parse_accident_time};
use crate::error::{DatasetError, DatasetResult};
use crate::models::{AccidentRecord, CategoryDomain};

pub const OBJECT_ID: &str = "OBJECTID";
pub const ACCIDENT_DATE: &str = "ACCIDENT_DATE";
pub const ACCIDENT_TIME: &str = "ACCIDENT_TIME";
pub const ACCIDENT_TYPE: &str = "ACCIDENT_TYPE";
pub const LIGHT_CONDITION: &str = "LIGHT_CONDITION";
pub const ALCOHOL_RELATED: &str = "ALCOHOL_RELATED";
pub const TOTAL_PERSONS: &str = "TOTAL_PERSONS";

/// Columns the pipeline reads. Any other column is carried through untouched.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    OBJECT_ID,
    ACCIDENT_DATE,
    ACCIDENT_TIME,
    ACCIDENT_TYPE,
    LIGHT_CONDITION,
    ALCOHOL_RELATED,
    TOTAL_PERSONS,
];

/// Typed records plus the categorical domains discovered while building them.
#[derive(Debug, Clone, Default)]
pub struct ParsedAccidents {
    pub records: Vec<AccidentRecord>,
    pub accident_types: CategoryDomain,
    pub light_conditions: CategoryDomain,
    pub alcohol_values: CategoryDomain,
}

/// Parse CSV bytes into a Polars DataFrame with every column read as a string.
///
/// Typing happens in [`dataframe_to_records`] so that a malformed cell is
/// reported with its row instead of silently changing a column's dtype.
pub fn parse_accident_csv_bytes(bytes: Vec<u8>) -> DatasetResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    for name in REQUIRED_COLUMNS {
        if !df.get_column_names().iter().any(|c| c.as_str() == name) {
            return Err(DatasetError::MissingColumn(name));
        }
    }

    if df.height() == 0 {
        return Err(DatasetError::Empty);
    }

    Ok(df)
}

/// Convert a string-typed accident DataFrame into [`AccidentRecord`]s.
///
/// Rows are numbered from 1 in errors. The first malformed row aborts the
/// conversion.
pub fn dataframe_to_records(df: &DataFrame) -> DatasetResult<ParsedAccidents> {
    let ids = string_column(df, OBJECT_ID)?;
    let dates = string_column(df, ACCIDENT_DATE)?;
    let times = string_column(df, ACCIDENT_TIME)?;
    let types = string_column(df, ACCIDENT_TYPE)?;
    let lights = string_column(df, LIGHT_CONDITION)?;
    let alcohol = string_column(df, ALCOHOL_RELATED)?;
    let persons = string_column(df, TOTAL_PERSONS)?;

    let mut parsed = ParsedAccidents {
        records: Vec::with_capacity(df.height()),
        ..Default::default()
    };

    for i in 0..df.height() {
        let row = i + 1;

        let id = cell(ids, i, OBJECT_ID)?;

        let raw_date = cell(dates, i, ACCIDENT_DATE)?;
        let date = parse_accident_date(raw_date).ok_or_else(|| DatasetError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;

        let raw_time = cell(times, i, ACCIDENT_TIME)?;
        let time = parse_accident_time(raw_time).ok_or_else(|| DatasetError::InvalidTime {
            row,
            value: raw_time.to_string(),
        })?;

        let raw_persons = cell(persons, i, TOTAL_PERSONS)?;
        let total_persons: u32 = raw_persons.parse().map_err(|_| DatasetError::InvalidPersons {
            row,
            value: raw_persons.to_string(),
        })?;

        let accident_type = parsed.accident_types.intern(cell(types, i, ACCIDENT_TYPE)?);
        let light_condition = parsed
            .light_conditions
            .intern(cell(lights, i, LIGHT_CONDITION)?);
        let alcohol_related = parsed
            .alcohol_values
            .intern(cell(alcohol, i, ALCOHOL_RELATED)?);

        parsed.records.push(AccidentRecord::new(
            id,
            date,
            time,
            accident_type,
            light_condition,
            alcohol_related,
            total_persons,
        ));
    }

    Ok(parsed)
}

/// Trimmed, non-empty cell at index `i`.
fn cell<'a>(ca: &'a StringChunked, i: usize, column: &'static str) -> DatasetResult<&'a str> {
    ca.get(i)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DatasetError::MissingValue { column, row: i + 1 })
}

fn string_column<'a>(df: &'a DataFrame, name: &'static str) -> DatasetResult<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| DatasetError::MissingColumn(name))?;
    Ok(column.str()?)
}
