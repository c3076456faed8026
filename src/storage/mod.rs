pub mod memory;
pub mod workbook;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Entry, Table},
    errors::Result,
};

pub use memory::MemoryStore;
pub use workbook::{JsonWorkbook, WorksheetNames};

/// Column headers written when a workbook is created.
pub const HEADER: [&str; 4] = ["Date", "Description", "Category", "Amount"];

/// A single worksheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(text) if text.is_empty())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(value) => write!(f, "{value}"),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

pub type Row = Vec<Cell>;

/// Builds the `(date, description, category, amount)` row for `entry`.
pub fn entry_row(entry: &Entry) -> Row {
    vec![
        Cell::from(entry.date_label()),
        Cell::from(entry.description.as_str()),
        Cell::from(entry.category.as_str()),
        Cell::from(entry.amount),
    ]
}

/// Append-only tabular storage backing the `income` and `expenses` tables.
pub trait RowStore {
    /// Appends `row` to `table` and returns the 1-based row number it landed on.
    fn append_row(&mut self, table: Table, row: Row) -> Result<usize>;

    fn append_entry(&mut self, table: Table, entry: &Entry) -> Result<usize> {
        self.append_row(table, entry_row(entry))
    }
}

/// Insertion index for the next row: directly after the last row whose first
/// column holds a value.
pub(crate) fn next_row_index(rows: &[Row]) -> usize {
    rows.iter()
        .rposition(|row| row.first().is_some_and(|cell| !cell.is_blank()))
        .map_or(0, |index| index + 1)
}
