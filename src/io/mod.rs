//! Table readers
//!
//! Every reader produces [`RawTable`]s: header text becomes [`Header`]s and
//! body text becomes [`Cell`]s. Columns without header text get a
//! `Unnamed: <i>` placeholder name.

pub mod csv;
pub mod html;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::column::{Cell, Header};
use crate::error::Result;
use crate::table::RawTable;

// Re-export commonly used functions
pub use self::csv::{read_csv, read_csv_from_reader};
pub use self::html::{fetch_html, fetch_tables, read_html, read_html_file};

/// Options shared by the readers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Leading rows that form the header; more than one gives multi-level headers
    pub header_rows: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { header_rows: 1 }
    }
}

/// Where tables come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// HTML page fetched over HTTP(S)
    Url(String),
    /// Local HTML document
    HtmlFile(PathBuf),
    /// Local CSV file (one table)
    CsvFile(PathBuf),
}

impl TableSource {
    /// Classify a command-line argument
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            TableSource::Url(source.to_string())
        } else if Path::new(&lower)
            .extension()
            .map_or(false, |ext| ext == "csv")
        {
            TableSource::CsvFile(PathBuf::from(source))
        } else {
            TableSource::HtmlFile(PathBuf::from(source))
        }
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Url(url) => write!(f, "{}", url),
            TableSource::HtmlFile(path) | TableSource::CsvFile(path) => {
                write!(f, "{}", path.display())
            }
        }
    }
}

/// Read every table of a source, in document order
pub fn load_tables(source: &TableSource, options: &ReadOptions) -> Result<Vec<RawTable>> {
    match source {
        TableSource::Url(url) => fetch_tables(url, options),
        TableSource::HtmlFile(path) => read_html_file(path, options),
        TableSource::CsvFile(path) => Ok(vec![read_csv(path, options)?]),
    }
}

/// Name given to a column without header text
pub fn placeholder_name(column: usize, level: Option<usize>) -> String {
    match level {
        Some(level) => format!("Unnamed: {}_level_{}", column, level),
        None => format!("Unnamed: {}", column),
    }
}

/// Build a raw table from header text rows and parsed body rows
///
/// The table is as wide as its widest row. With no header rows the columns
/// are named `column_<i>`.
pub(crate) fn assemble_table(header_rows: &[Vec<String>], body: Vec<Vec<Cell>>) -> Result<RawTable> {
    let width = header_rows
        .iter()
        .map(Vec::len)
        .chain(body.iter().map(Vec::len))
        .max()
        .unwrap_or(0);

    let headers = (0..width)
        .map(|col| header_for(header_rows, col))
        .collect();

    RawTable::from_rows(headers, body)
}

fn header_for(header_rows: &[Vec<String>], col: usize) -> Header {
    let text_at = |row: &Vec<String>| row.get(col).map(|s| s.trim().to_string()).unwrap_or_default();

    match header_rows {
        [] => Header::Flat(format!("column_{}", col)),
        [row] => {
            let text = text_at(row);
            if text.is_empty() {
                Header::Flat(placeholder_name(col, None))
            } else {
                Header::Flat(text)
            }
        }
        rows => Header::MultiLevel(
            rows.iter()
                .enumerate()
                .map(|(level, row)| {
                    let text = text_at(row);
                    if text.is_empty() {
                        placeholder_name(col, Some(level))
                    } else {
                        text
                    }
                })
                .collect(),
        ),
    }
}
