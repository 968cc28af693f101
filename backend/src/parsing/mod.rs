//! Parsers for the accident statistics CSV format.
//!
//! - [`accident_csv`]: read the source file into a Polars DataFrame and
//!   convert it into typed [`AccidentRecord`](crate::models::AccidentRecord)s
//! - [`datetime`]: `ACCIDENT_DATE` / `ACCIDENT_TIME` cell parsing
//!
//! # Example
//!
//! ```no_run
//! use crash_stats::parsing::accident_csv::{parse_accident_csv_bytes, dataframe_to_records};
//!
//! let bytes = std::fs::read("Crash_Statistics_Victoria.csv").expect("read");
//! let df = parse_accident_csv_bytes(bytes).expect("parse");
//! let parsed = dataframe_to_records(&df).expect("convert");
//! println!("{} accidents", parsed.records.len());
//! ```

pub mod accident_csv;
pub mod datetime;

#[cfg(test)]
mod accident_csv_tests;

pub use accident_csv::{dataframe_to_records, parse_accident_csv_bytes, ParsedAccidents};
pub use datetime::{parse_accident_date, parse_accident_time};
