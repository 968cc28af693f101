use log::{debug, info};
use std::path::Path;

use super::checksum::calculate_checksum;
use super::dataset::Dataset;
use crate::error::{DatasetError, DatasetResult};
use crate::parsing::accident_csv;

/// Loads the accident dataset from CSV.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the dataset from a CSV file.
    ///
    /// Any unreadable file, malformed row or empty file is an error; no
    /// partial dataset is returned.
    pub fn load_from_file(path: &Path) -> DatasetResult<Dataset> {
        let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_bytes(bytes, path.display().to_string())
    }

    /// Load the dataset from CSV content already in memory.
    pub fn load_from_bytes(bytes: Vec<u8>, source_name: impl Into<String>) -> DatasetResult<Dataset> {
        let source_name = source_name.into();
        let checksum = calculate_checksum(&bytes);
        debug!("Parsing {} ({} bytes)", source_name, bytes.len());

        let frame = accident_csv::parse_accident_csv_bytes(bytes)?;
        let parsed = accident_csv::dataframe_to_records(&frame)?;
        let dataset = Dataset::new(frame, parsed, checksum, source_name)?;

        let span = dataset.span();
        info!(
            "Loaded {} accidents from {} ({} to {}, checksum {})",
            dataset.len(),
            dataset.source_name(),
            span.min_date,
            span.max_date,
            dataset.checksum()
        );
        Ok(dataset)
    }

    /// Load the dataset from a CSV string.
    pub fn load_from_str(csv: &str, source_name: impl Into<String>) -> DatasetResult<Dataset> {
        Self::load_from_bytes(csv.as_bytes().to_vec(), source_name)
    }
}
