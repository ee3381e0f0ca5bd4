use serde::Deserialize;

use crate::column::coerce_numeric;
use crate::error::Result;
use crate::table::NormalizedTable;

/// Default cap on the number of bars per chart
pub const DEFAULT_MAX_ROWS: usize = 30;

/// Settings for [`DataCleaner`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Rows kept after dropping missing values
    pub max_rows: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Aligned labels and values ready to plot
///
/// Both sequences have the same length and the values contain no missing
/// entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl CleanedSeries {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(label, value)` pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.labels, self.values)
    }
}

impl FromIterator<(String, f64)> for CleanedSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

/// Pairs a label column with one value column
#[derive(Debug, Clone, Default)]
pub struct DataCleaner {
    config: CleanerConfig,
}

impl DataCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn max_rows(&self) -> usize {
        self.config.max_rows
    }

    /// Extract `(label, value)` pairs from two columns of `table`
    ///
    /// Labels are rendered as display strings, values are coerced to numbers
    /// and rows without a numeric value are dropped. At most `max_rows`
    /// surviving rows are kept, in table order.
    pub fn clean(
        &self,
        table: &NormalizedTable,
        label_column: &str,
        value_column: &str,
    ) -> Result<CleanedSeries> {
        let labels = table.require_column(label_column)?;
        let values = table.require_column(value_column)?;

        let series = labels
            .cells()
            .iter()
            .zip(values.cells())
            .filter_map(|(label, value)| {
                coerce_numeric(value).map(|number| (label.display_string(), number))
            })
            .take(self.config.max_rows)
            .collect();

        Ok(series)
    }
}
