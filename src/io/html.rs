//! HTML `<table>` extraction
//!
//! Every `<table>` element of a document becomes one raw table. Cells are the
//! `th`/`td` children of each `tr`; `colspan` and `rowspan` are expanded by
//! repeating the cell text into every grid position it covers.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use super::{assemble_table, ReadOptions};
use crate::column::Cell;
use crate::error::{Error, Result};
use crate::table::RawTable;

/// Upper bound on `colspan`/`rowspan` values taken from a document
const MAX_SPAN: usize = 1000;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Download a page and return its body
pub fn fetch_html(url: &str) -> Result<String> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("autochart/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let body = client.get(url).send()?.error_for_status()?.text()?;
    info!("fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

/// Download a page and read its tables
pub fn fetch_tables(url: &str, options: &ReadOptions) -> Result<Vec<RawTable>> {
    let body = fetch_html(url)?;
    read_html(&body, options)
}

/// Read the tables of a local HTML file
pub fn read_html_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Vec<RawTable>> {
    let text = fs::read_to_string(path.as_ref())?;
    read_html(&text, options)
}

/// Read every table of an HTML document, in document order
///
/// The first `options.header_rows` rows of each table are its header. Body
/// cells accept `,` as a thousands separator. A document without any table
/// is an error.
pub fn read_html(html: &str, options: &ReadOptions) -> Result<Vec<RawTable>> {
    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;

    let mut tables = Vec::new();
    for table in document.select(&table_sel) {
        let mut rows = grid_rows(table, &row_sel);
        let split = options.header_rows.min(rows.len());
        let body_rows = rows.split_off(split);

        let body = body_rows
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|text| Cell::parse_with_thousands(text, Some(',')))
                    .collect()
            })
            .collect();

        let parsed = assemble_table(&rows, body)?;
        debug!(
            "table {}: {} columns, {} rows",
            tables.len(),
            parsed.column_count(),
            parsed.row_count()
        );
        tables.push(parsed);
    }

    if tables.is_empty() {
        return Err(Error::EmptyData("no tables found in document".to_string()));
    }
    Ok(tables)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("invalid selector '{}': {}", css, e)))
}

struct PendingSpan {
    text: String,
    rows_left: usize,
}

/// Text grid of one table with spans expanded
fn grid_rows(table: ElementRef<'_>, row_sel: &Selector) -> Vec<Vec<String>> {
    let mut pending: Vec<Option<PendingSpan>> = Vec::new();
    let mut rows = Vec::new();

    for tr in table.select(row_sel).filter(|tr| belongs_to(*tr, table)) {
        let mut row = Vec::new();
        let mut col = 0;

        for cell in tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| matches!(el.value().name(), "th" | "td"))
        {
            while let Some(text) = take_pending(&mut pending, col) {
                row.push(text);
                col += 1;
            }

            let text = cell_text(cell);
            let colspan = span_attr(cell, "colspan");
            let rowspan = span_attr(cell, "rowspan");
            for _ in 0..colspan {
                if rowspan > 1 {
                    if pending.len() <= col {
                        pending.resize_with(col + 1, || None);
                    }
                    pending[col] = Some(PendingSpan {
                        text: text.clone(),
                        rows_left: rowspan - 1,
                    });
                }
                row.push(text.clone());
                col += 1;
            }
        }

        // Spans reaching past the last cell of this row
        while pending[col.min(pending.len())..].iter().any(Option::is_some) {
            row.push(take_pending(&mut pending, col).unwrap_or_default());
            col += 1;
        }

        if !row.is_empty() {
            rows.push(row);
        }
    }

    rows
}

fn take_pending(pending: &mut [Option<PendingSpan>], col: usize) -> Option<String> {
    let slot = pending.get_mut(col)?;
    let span = slot.as_mut()?;
    span.rows_left -= 1;
    let text = span.text.clone();
    if span.rows_left == 0 {
        *slot = None;
    }
    Some(text)
}

/// Whether `row` sits directly in `table` rather than in a nested table
fn belongs_to(row: ElementRef<'_>, table: ElementRef<'_>) -> bool {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
        .map_or(false, |owner| owner.id() == table.id())
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn span_attr(cell: ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Header;

    fn read(html: &str) -> Vec<RawTable> {
        read_html(html, &ReadOptions::default()).unwrap()
    }

    #[test]
    fn test_simple_table() {
        let tables = read(
            "<table>
               <tr><th>Country</th><th>GDP</th></tr>
               <tr><td>Chile</td><td>1,234</td></tr>
               <tr><td> Peru </td><td>n/a</td></tr>
             </table>",
        );

        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.columns()[0].header(), &Header::from("Country"));
        assert_eq!(
            table.columns()[0].cells(),
            &[Cell::from("Chile"), Cell::from("Peru")]
        );
        assert_eq!(
            table.columns()[1].cells(),
            &[Cell::Number(1234.0), Cell::from("n/a")]
        );
    }

    #[test]
    fn test_colspan_and_rowspan() {
        let tables = read(
            "<table>
               <tr><th>Region</th><th>Name</th><th>Value</th></tr>
               <tr><td rowspan=\"2\">North</td><td>A</td><td>1</td></tr>
               <tr><td>B</td><td>2</td></tr>
               <tr><td colspan=\"2\">Total</td><td>3</td></tr>
             </table>",
        );

        let table = &tables[0];
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.columns()[0].cells(),
            &[Cell::from("North"), Cell::from("North"), Cell::from("Total")]
        );
        assert_eq!(
            table.columns()[1].cells(),
            &[Cell::from("A"), Cell::from("B"), Cell::from("Total")]
        );
        assert_eq!(
            table.columns()[2].cells(),
            &[Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)]
        );
    }

    #[test]
    fn test_trailing_rowspan() {
        let tables = read(
            "<table>
               <tr><th>Name</th><th>Note</th></tr>
               <tr><td>A</td><td rowspan=\"2\">shared</td></tr>
               <tr><td>B</td></tr>
             </table>",
        );

        assert_eq!(
            tables[0].columns()[1].cells(),
            &[Cell::from("shared"), Cell::from("shared")]
        );
    }

    #[test]
    fn test_multi_level_header() {
        let options = ReadOptions { header_rows: 2 };
        let tables = read_html(
            "<table>
               <tr><th></th><th colspan=\"2\">Population</th></tr>
               <tr><th>City</th><th>2010</th><th>2020</th></tr>
               <tr><td>Lima</td><td>8</td><td>10</td></tr>
             </table>",
            &options,
        )
        .unwrap();

        let headers: Vec<Header> = tables[0]
            .columns()
            .iter()
            .map(|c| c.header().clone())
            .collect();
        assert_eq!(headers[0], Header::from(&["Unnamed: 0_level_0", "City"][..]));
        assert_eq!(headers[2], Header::from(&["Population", "2020"][..]));
    }

    #[test]
    fn test_nested_tables_are_separate() {
        let tables = read(
            "<table>
               <tr><th>Outer</th></tr>
               <tr><td><table><tr><th>Inner</th></tr><tr><td>x</td></tr></table></td></tr>
             </table>",
        );

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].row_count(), 1);
        assert_eq!(tables[0].column_count(), 1);
        assert_eq!(tables[1].columns()[0].header(), &Header::from("Inner"));
        assert_eq!(tables[1].columns()[0].cells(), &[Cell::from("x")]);
    }

    #[test]
    fn test_no_tables() {
        let result = read_html("<p>nothing here</p>", &ReadOptions::default());
        assert!(matches!(result, Err(Error::EmptyData(_))));
    }
}
