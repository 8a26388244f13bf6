//! Tabular preview of the first rows of a record set.

use crate::types::Record;
use serde::Serialize;

/// Row counts offered by the preview selector
pub const PREVIEW_SIZES: &[usize] = &[10, 20, 50, 100];

/// Default number of preview rows
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Placeholder for missing or empty cells
pub const EMPTY_CELL: &str = "-";

/// Column names plus the first rows rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Number of records in the full set
    pub total: usize,
}

impl DataPreview {
    /// Preview the first `limit` records
    ///
    /// Columns come from the first record; a column literally named `key`
    /// is left out.
    pub fn new(records: &[Record], limit: usize) -> Self {
        let columns: Vec<String> = records
            .first()
            .map(|first| {
                first
                    .field_names()
                    .filter(|name| *name != "key")
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let rows = records
            .iter()
            .take(limit)
            .map(|record| {
                columns
                    .iter()
                    .map(|column| match record.text(column) {
                        Some(text) if !text.is_empty() => text,
                        _ => EMPTY_CELL.to_string(),
                    })
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows,
            total: records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when more records exist than are shown
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total
    }
}
