use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

pub mod reader;
pub mod values;

use reader::open_maybe_gz;
use values::{RatingCell, classify_cell};

pub const CATEGORY_COLUMN: &str = "intent_category";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Survey responses as read from disk. Cells stay as text until a rating
/// column is requested, so categorical and free-text columns pass through.
#[derive(Debug, Clone)]
pub struct RatingsTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Rows of one intent category. Borrows the table; nothing is copied until
/// a series is extracted.
#[derive(Debug, Clone)]
pub struct CategoryView<'a> {
    pub table: &'a RatingsTable,
    pub category: String,
    pub rows: Vec<usize>,
}

/// Non-missing ratings of a single column, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSeries {
    pub column: String,
    pub values: Vec<f64>,
    pub dropped: usize,
}

impl RatingsTable {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn category(&self, category: &str) -> CategoryView<'_> {
        let rows = match self.column_index(CATEGORY_COLUMN) {
            Some(idx) => self
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.get(idx).map(|v| v.as_str()) == Some(category))
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };
        CategoryView {
            table: self,
            category: category.to_string(),
            rows,
        }
    }
}

impl CategoryView<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `Ok(None)` when the column does not exist.
    pub fn series(&self, column: &str) -> Result<Option<RatingSeries>, InputError> {
        let Some(col) = self.table.column_index(column) else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(self.rows.len());
        let mut dropped = 0usize;
        for &row_idx in &self.rows {
            let raw = self.table.rows[row_idx]
                .get(col)
                .map(|s| s.as_str())
                .unwrap_or("");
            match classify_cell(raw) {
                RatingCell::Value(v) => values.push(v),
                RatingCell::Missing => dropped += 1,
                RatingCell::Invalid => {
                    return Err(InputError::Parse(format!(
                        "non-numeric rating {:?} in column {} for {} (data line {})",
                        raw,
                        column,
                        self.category,
                        row_idx + 1
                    )));
                }
            }
        }
        Ok(Some(RatingSeries {
            column: column.to_string(),
            values,
            dropped,
        }))
    }
}

pub fn load_ratings(path: &Path) -> Result<RatingsTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|s| s.trim().to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse(format!(
            "ratings file {} has no header",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    let table = RatingsTable { columns, rows };
    info!(
        "loaded ratings table: path={}, rows={}, columns={}",
        path.display(),
        table.n_rows(),
        table.n_cols()
    );
    debug!("columns: {}", table.columns.join(","));

    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
