//! Typed table model
//!
//! A [`Table`] is an ordered list of equally long [`Column`]s. Readers build
//! [`RawTable`]s whose headers may span several rows; [`normalize`] turns them
//! into [`NormalizedTable`]s with one string name per column.

pub mod normalize;

use crate::column::{Cell, Column, Header};
use crate::error::{Error, Result};

pub use normalize::{flatten_header, normalize};

/// Table as produced by a reader
pub type RawTable = Table<Header>;

/// Table whose column names are plain strings
pub type NormalizedTable = Table<String>;

/// Ordered columns of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct Table<H = String> {
    columns: Vec<Column<H>>,
    row_count: usize,
}

impl<H> Table<H> {
    /// Create a table from columns
    ///
    /// Every column must have the same number of cells.
    pub fn new(columns: Vec<Column<H>>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        if let Some(bad) = columns.iter().find(|col| col.len() != row_count) {
            return Err(Error::InconsistentRowCount {
                expected: row_count,
                found: bad.len(),
            });
        }

        Ok(Self { columns, row_count })
    }

    /// Build a table from headers and row-major cells
    ///
    /// Short rows are padded with [`Cell::Missing`]; rows wider than the
    /// header are rejected.
    pub fn from_rows(headers: Vec<H>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = headers.len();
        let mut cells: Vec<Vec<Cell>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(Error::InvalidInput(format!(
                    "row {} has {} cells but the table has {} columns",
                    row_idx,
                    row.len(),
                    width
                )));
            }
            let missing = width - row.len();
            for (col_idx, cell) in row
                .into_iter()
                .chain(std::iter::repeat(Cell::Missing).take(missing))
                .enumerate()
            {
                cells[col_idx].push(cell);
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(header, cells)| Column::new(header, cells))
            .collect();
        Self::new(columns)
    }

    /// Columns in order
    pub fn columns(&self) -> &[Column<H>] {
        &self.columns
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

impl Table<String> {
    /// Look up a column by name (first match)
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name() == name)
    }

    /// Look up a column by name, failing with [`Error::ColumnNotFound`]
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }
}
