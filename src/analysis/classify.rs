//! Column role inference
//!
//! Decides which column of a table names the categories of a chart and which
//! columns carry the values to plot.

use log::debug;
use serde::Deserialize;

use crate::column::Column;
use crate::table::NormalizedTable;

/// Tuning knobs for [`ColumnClassifier`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum share of numeric cells for a value column (inclusive)
    pub numeric_ratio: f64,
    /// A label column needs more distinct values than this share of the rows
    pub uniqueness_ratio: f64,
    /// Column names containing this marker had no header in the source
    pub placeholder_marker: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            numeric_ratio: 0.5,
            uniqueness_ratio: 0.5,
            placeholder_marker: "Unnamed".to_string(),
        }
    }
}

/// Roles inferred for the columns of one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedColumns {
    /// Category column, if any qualified
    pub label: Option<String>,
    /// Value columns in table order
    pub values: Vec<String>,
}

impl ClassifiedColumns {
    /// Whether the table can be charted: a label and at least one value column
    pub fn is_chartable(&self) -> bool {
        self.label.is_some() && !self.values.is_empty()
    }
}

/// Measurements the classifier takes of a single column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    /// Share of cells that coerce to a number
    pub numeric_ratio: f64,
    /// Distinct non-missing values
    pub distinct_count: usize,
    /// Numeric values form a step-1 progression (a row index)
    pub sequential: bool,
}

/// Measure one column of a table with `row_count` rows
pub fn profile_column(column: &Column, row_count: usize) -> ColumnProfile {
    let numeric: Vec<f64> = column.numeric_values().into_iter().flatten().collect();
    let numeric_ratio = if row_count == 0 {
        0.0
    } else {
        numeric.len() as f64 / row_count as f64
    };

    ColumnProfile {
        name: column.name().to_string(),
        numeric_ratio,
        distinct_count: column.distinct_count(),
        sequential: is_sequential_index(&numeric),
    }
}

/// True when the values have at least one consecutive difference and every
/// difference is exactly 1
pub fn is_sequential_index(values: &[f64]) -> bool {
    values.len() >= 2 && values.windows(2).all(|pair| pair[1] - pair[0] == 1.0)
}

/// Infers label and value columns of a table
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    config: ClassifierConfig,
}

impl ColumnClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Assign roles to the columns of `table`
    ///
    /// Columns are visited in order. Placeholder-named and sequential-index
    /// columns take no role. A column that is numeric often enough becomes a
    /// value column; otherwise the first column unique enough becomes the
    /// label and later candidates are ignored.
    pub fn classify(&self, table: &NormalizedTable) -> ClassifiedColumns {
        let mut result = ClassifiedColumns::default();
        let row_count = table.row_count();
        if row_count == 0 {
            return result;
        }

        for column in table.columns() {
            if column.name().contains(self.config.placeholder_marker.as_str()) {
                debug!("skipping placeholder column '{}'", column.name());
                continue;
            }

            let profile = profile_column(column, row_count);
            if profile.sequential {
                debug!("skipping sequential index column '{}'", profile.name);
                continue;
            }

            if profile.numeric_ratio >= self.config.numeric_ratio {
                debug!(
                    "value column '{}' (numeric ratio {:.2})",
                    profile.name, profile.numeric_ratio
                );
                result.values.push(profile.name);
            } else if result.label.is_none()
                && profile.distinct_count as f64 > row_count as f64 * self.config.uniqueness_ratio
            {
                debug!(
                    "label column '{}' ({} distinct of {} rows)",
                    profile.name, profile.distinct_count, row_count
                );
                result.label = Some(profile.name);
            }
        }

        result
    }
}

/// Classify with the default thresholds
pub fn classify_columns(table: &NormalizedTable) -> ClassifiedColumns {
    ColumnClassifier::default().classify(table)
}
