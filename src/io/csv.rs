use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{assemble_table, ReadOptions};
use crate::column::Cell;
use crate::error::{Error, Result};
use crate::table::RawTable;

/// Read a CSV file into a raw table
pub fn read_csv<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<RawTable> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    read_csv_from_reader(file, options)
}

/// Read CSV data from any reader
///
/// The first `options.header_rows` records are header text; the rest are
/// parsed into cells. Records may have different lengths.
pub fn read_csv_from_reader<R: Read>(reader: R, options: &ReadOptions) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut header_rows: Vec<Vec<String>> = Vec::with_capacity(options.header_rows);
    let mut body: Vec<Vec<Cell>> = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(Error::Csv)?;
        if header_rows.len() < options.header_rows {
            header_rows.push(record.iter().map(|field| field.to_string()).collect());
        } else {
            body.push(record.iter().map(Cell::parse).collect());
        }
    }

    assemble_table(&header_rows, body)
}
