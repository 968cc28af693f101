use polars::prelude::*;

use crate::error::{DatasetError, DatasetResult};
use crate::models::{AccidentRecord, CategoryDomain, DateSpan};
use crate::parsing::ParsedAccidents;

/// The immutable accident dataset.
///
/// Built once at startup and shared read-only by every render pass. The
/// source frame is kept as read so the export reproduces the input columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: DataFrame,
    records: Vec<AccidentRecord>,
    accident_types: CategoryDomain,
    light_conditions: CategoryDomain,
    alcohol_values: CategoryDomain,
    span: DateSpan,
    checksum: String,
    source_name: String,
}

impl Dataset {
    pub fn new(
        source: DataFrame,
        parsed: ParsedAccidents,
        checksum: String,
        source_name: impl Into<String>,
    ) -> DatasetResult<Self> {
        let span = DateSpan::covering(parsed.records.iter().map(AccidentRecord::accident_date))
            .ok_or(DatasetError::Empty)?;

        Ok(Self {
            source,
            records: parsed.records,
            accident_types: parsed.accident_types,
            light_conditions: parsed.light_conditions,
            alcohol_values: parsed.alcohol_values,
            span,
            checksum,
            source_name: source_name.into(),
        })
    }

    pub fn records(&self) -> &[AccidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn accident_types(&self) -> &CategoryDomain {
        &self.accident_types
    }

    pub fn light_conditions(&self) -> &CategoryDomain {
        &self.light_conditions
    }

    pub fn alcohol_values(&self) -> &CategoryDomain {
        &self.alcohol_values
    }

    /// First and last accident date in the file.
    pub fn span(&self) -> DateSpan {
        self.span
    }

    /// SHA-256 of the raw source bytes.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Where the dataset was read from (file path or a caller-chosen label).
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// The full, unfiltered dataset as UTF-8 CSV with a header row.
    pub fn export_csv(&self) -> DatasetResult<Vec<u8>> {
        let mut frame = self.source.clone();
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .include_header(true)
            .finish(&mut frame)
            .map_err(|e| DatasetError::Export(e.to_string()))?;
        Ok(buffer)
    }
}
