//! Fixture builders for integration tests
//!
//! Files are written into a caller-owned [`tempfile::TempDir`], which removes
//! them when it is dropped.

use std::fs;
use std::path::{Path, PathBuf};

use autochart::{Cell, Column, Header, RawTable};

/// Write a CSV file named `name` into `dir`
pub fn create_test_csv(dir: &Path, name: &str, headers: &[&str], rows: &[Vec<&str>]) -> PathBuf {
    let path = dir.join(name);

    let mut content = headers.join(",");
    content.push('\n');
    for row in rows {
        content.push_str(&row.join(","));
        content.push('\n');
    }
    fs::write(&path, content).expect("Failed to write test CSV");

    path
}

/// Render one `<table>` with a single header row
pub fn html_table(headers: &[&str], rows: &[Vec<&str>]) -> String {
    let mut html = String::from("<table>\n<tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Write an HTML page holding the given tables into `dir`
pub fn create_test_html(dir: &Path, name: &str, tables: &[String]) -> PathBuf {
    let path = dir.join(name);
    let content = format!(
        "<!DOCTYPE html>\n<html><body>\n<h1>Fixture</h1>\n{}</body></html>\n",
        tables.concat()
    );
    fs::write(&path, content).expect("Failed to write test HTML");
    path
}

/// Names of the files in `dir`, sorted
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to list test directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Build a raw table with flat headers from `(name, cells)` pairs
pub fn raw_table(columns: Vec<(&str, Vec<Cell>)>) -> RawTable {
    RawTable::new(
        columns
            .into_iter()
            .map(|(name, cells)| Column::new(Header::from(name), cells))
            .collect(),
    )
    .expect("Columns must have equal length")
}

/// Cells from text values
pub fn text_cells(values: &[&str]) -> Vec<Cell> {
    values.iter().map(|v| Cell::from(*v)).collect()
}

/// Cells from numbers
pub fn number_cells(values: &[f64]) -> Vec<Cell> {
    values.iter().map(|v| Cell::Number(*v)).collect()
}
