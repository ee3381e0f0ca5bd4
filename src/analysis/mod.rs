//! Table analysis: column role inference and series extraction

pub mod classify;
pub mod clean;

pub use classify::{
    classify_columns, is_sequential_index, profile_column, ClassifiedColumns, ClassifierConfig,
    ColumnClassifier, ColumnProfile,
};
pub use clean::{CleanedSeries, CleanerConfig, DataCleaner, DEFAULT_MAX_ROWS};
