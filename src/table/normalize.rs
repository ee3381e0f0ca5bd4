use super::{NormalizedTable, RawTable, Table};
use crate::column::Header;

/// Flatten a header into a single column name
///
/// Multi-level headers join their non-empty parts with a single space and
/// trim the result; flat headers are returned unchanged.
pub fn flatten_header(header: &Header) -> String {
    match header {
        Header::Flat(name) => name.clone(),
        Header::MultiLevel(parts) => parts
            .iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string(),
    }
}

/// Replace every header of a raw table by its flattened name
pub fn normalize(table: RawTable) -> NormalizedTable {
    let row_count = table.row_count;
    let columns = table
        .columns
        .into_iter()
        .map(|col| col.map_header(|header| flatten_header(&header)))
        .collect();

    // Column lengths are untouched
    Table { columns, row_count }
}
