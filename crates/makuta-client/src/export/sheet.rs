use std::path::Path;

use crate::error::{ClientError, ClientResult};

const MIN_COLUMN_WIDTH: usize = 8;
const MAX_COLUMN_WIDTH: usize = 48;

/// In-memory tabular document: an informational header block, one row of
/// column names, and the data rows. Widths are derived from content so the
/// same input always yields the same layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub header_rows: Vec<Vec<String>>,
    pub data_rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|name| name.to_string()).collect(),
            header_rows: Vec::new(),
            data_rows: Vec::new(),
        }
    }

    /// Rows the serialized file will contain: header block, column names,
    /// data.
    pub fn row_count(&self) -> usize {
        self.header_rows.len() + 1 + self.data_rows.len()
    }

    /// Per-column display width: the widest of the column name and every
    /// cell, clamped to a readable band. Deterministic for a given sheet.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|name| name.chars().count())
            .collect();

        for row in &self.data_rows {
            for (index, cell) in row.iter().enumerate() {
                if let Some(slot) = widths.get_mut(index) {
                    *slot = (*slot).max(cell.chars().count());
                }
            }
        }

        widths
            .iter()
            .map(|width| (*width).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
            .collect()
    }

    pub fn write_csv(&self, path: &Path) -> ClientResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|error| ClientError::export_write_failed(path, &error.to_string()))?;

        for row in &self.header_rows {
            writer
                .write_record(row)
                .map_err(|error| ClientError::export_write_failed(path, &error.to_string()))?;
        }

        writer
            .write_record(&self.columns)
            .map_err(|error| ClientError::export_write_failed(path, &error.to_string()))?;

        for row in &self.data_rows {
            writer
                .write_record(row)
                .map_err(|error| ClientError::export_write_failed(path, &error.to_string()))?;
        }

        writer
            .flush()
            .map_err(|error| ClientError::export_write_failed(path, &error.to_string()))
    }
}
