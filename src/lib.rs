//! Bar charts from the tables of a web page
//!
//! Tables are read from HTML (fetched or local) or CSV, headers are flattened,
//! and the first table with a categorical label column and numeric value
//! columns is drawn as one PNG bar chart per value column.

pub mod analysis;
pub mod column;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod table;
pub mod vis;

// Re-export commonly used types
pub use analysis::{classify_columns, ClassifiedColumns, ColumnClassifier, DataCleaner};
pub use column::{coerce_numeric, Cell, Column, Header};
pub use config::AutochartConfig;
pub use error::{Error, Result};
pub use io::{load_tables, ReadOptions, TableSource};
pub use pipeline::{ChartOutcome, ChartPipeline, PipelineReport, SelectedTable};
pub use table::{normalize, NormalizedTable, RawTable, Table};
pub use vis::{sanitize_filename, AxisFormatter, BarChartRenderer, ChartSpec, PlotSettings};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
