//! Common test utilities module
//!
//! HTML/CSV fixture files and table builders shared by the integration tests.

#![allow(dead_code)]

pub mod test_utils;

pub use test_utils::{
    create_test_csv, create_test_html, file_names, html_table, number_cells, raw_table,
    text_cells,
};
