//! Error types for dataset loading and export.
//!
//! Every variant here is a load failure: the process refuses to serve a
//! partially parsed dataset. Date range problems and empty selections are not
//! errors and are reported through [`crate::services::advisories`] instead.

use std::path::PathBuf;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error type for dataset operations
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The source file could not be opened or read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] polars::error::PolarsError),

    /// The file parsed but contained no data rows.
    #[error("Dataset contains no rows")]
    Empty,

    /// A column required by the pipeline is absent from the header.
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A required cell is empty.
    #[error("Missing {column} at row {row}")]
    MissingValue { column: &'static str, row: usize },

    /// `ACCIDENT_DATE` could not be parsed.
    #[error("Invalid ACCIDENT_DATE '{value}' at row {row}")]
    InvalidDate { row: usize, value: String },

    /// `ACCIDENT_TIME` is not in `HH.MM.SS` form.
    #[error("Invalid ACCIDENT_TIME '{value}' at row {row} (expected HH.MM.SS)")]
    InvalidTime { row: usize, value: String },

    /// `TOTAL_PERSONS` is not a non-negative integer.
    #[error("Invalid TOTAL_PERSONS '{value}' at row {row}")]
    InvalidPersons { row: usize, value: String },

    /// Writing the export buffer failed.
    #[error("Failed to export dataset: {0}")]
    Export(String),
}

impl DatasetError {
    /// 1-based data row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            DatasetError::MissingValue { row, .. }
            | DatasetError::InvalidDate { row, .. }
            | DatasetError::InvalidTime { row, .. }
            | DatasetError::InvalidPersons { row, .. } => Some(*row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_is_reported_for_cell_errors() {
        let err = DatasetError::InvalidTime {
            row: 7,
            value: "25.00.00".to_string(),
        };
        assert_eq!(err.row(), Some(7));
        assert!(err.to_string().contains("25.00.00"));
        assert!(err.to_string().contains("row 7"));
    }

    #[test]
    fn test_row_is_absent_for_file_errors() {
        assert_eq!(DatasetError::Empty.row(), None);
        assert_eq!(DatasetError::MissingColumn("OBJECTID").row(), None);
        assert_eq!(
            DatasetError::MissingColumn("OBJECTID").to_string(),
            "Missing required column: OBJECTID"
        );
    }
}
