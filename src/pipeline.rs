//! End-to-end chart generation
//!
//! Tables are normalized and classified one at a time; the first table with a
//! label column and at least one value column is charted, one PNG per value
//! column. Later tables are never looked at.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::analysis::{ClassifiedColumns, ColumnClassifier, DataCleaner};
use crate::config::AutochartConfig;
use crate::error::Result;
use crate::table::{normalize, NormalizedTable, RawTable};
use crate::vis::{BarChartRenderer, ChartSpec};

/// The table chosen for charting
#[derive(Debug, Clone)]
pub struct SelectedTable {
    /// Position among the source's tables
    pub index: usize,
    pub table: NormalizedTable,
    pub columns: ClassifiedColumns,
    /// Label column (also present in `columns.label`)
    pub label: String,
}

/// Result of rendering one value column
#[derive(Debug)]
pub struct ChartOutcome {
    pub value_column: String,
    pub result: Result<PathBuf>,
}

/// What a run produced
#[derive(Debug)]
pub enum PipelineReport {
    /// No table had both a label and a value column
    NoSuitableColumns,
    /// One chart attempt per value column of the selected table
    Rendered {
        table_index: usize,
        label_column: String,
        charts: Vec<ChartOutcome>,
    },
}

impl PipelineReport {
    /// Paths of the charts written successfully
    pub fn saved_paths(&self) -> Vec<&PathBuf> {
        match self {
            PipelineReport::NoSuitableColumns => Vec::new(),
            PipelineReport::Rendered { charts, .. } => charts
                .iter()
                .filter_map(|chart| chart.result.as_ref().ok())
                .collect(),
        }
    }
}

/// Classifier, cleaner and renderer wired together
#[derive(Debug, Clone, Default)]
pub struct ChartPipeline {
    classifier: ColumnClassifier,
    cleaner: DataCleaner,
    renderer: BarChartRenderer,
}

impl ChartPipeline {
    pub fn new(config: &AutochartConfig) -> Self {
        Self::from_parts(
            ColumnClassifier::new(config.classifier.clone()),
            DataCleaner::new(config.cleaner.clone()),
            BarChartRenderer::new(config.chart.clone()),
        )
    }

    pub fn from_parts(
        classifier: ColumnClassifier,
        cleaner: DataCleaner,
        renderer: BarChartRenderer,
    ) -> Self {
        Self {
            classifier,
            cleaner,
            renderer,
        }
    }

    /// Find the first chartable table
    ///
    /// Tables after the selected one are neither normalized nor classified.
    pub fn select_table<I>(&self, tables: I) -> Option<SelectedTable>
    where
        I: IntoIterator<Item = RawTable>,
    {
        tables
            .into_iter()
            .enumerate()
            .map(|(index, raw)| (index, normalize(raw)))
            .find_map(|(index, table)| {
                let columns = self.classifier.classify(&table);
                match columns.label.clone() {
                    Some(label) if !columns.values.is_empty() => Some(SelectedTable {
                        index,
                        table,
                        columns,
                        label,
                    }),
                    _ => {
                        debug!("table {} has no label/value pair, skipping", index);
                        None
                    }
                }
            })
    }

    /// Chart the first suitable table
    ///
    /// A failing value column is recorded in the report and the remaining
    /// columns are still rendered.
    pub fn run<I>(&self, tables: I) -> PipelineReport
    where
        I: IntoIterator<Item = RawTable>,
    {
        let selected = match self.select_table(tables) {
            Some(selected) => selected,
            None => return PipelineReport::NoSuitableColumns,
        };

        info!(
            "charting table {}: label '{}', values {:?}",
            selected.index, selected.label, selected.columns.values
        );

        let charts = selected
            .columns
            .values
            .iter()
            .map(|value_column| {
                let result = self.render_column(&selected.table, &selected.label, value_column);
                if let Err(e) = &result {
                    warn!("failed to chart '{}': {}", value_column, e);
                }
                ChartOutcome {
                    value_column: value_column.clone(),
                    result,
                }
            })
            .collect();

        PipelineReport::Rendered {
            table_index: selected.index,
            label_column: selected.label,
            charts,
        }
    }

    fn render_column(
        &self,
        table: &NormalizedTable,
        label_column: &str,
        value_column: &str,
    ) -> Result<PathBuf> {
        let series = self.cleaner.clean(table, label_column, value_column)?;
        let spec = ChartSpec::new(label_column, value_column, series);
        self.renderer.render(&spec)
    }
}
