//! PNG bar charts rendered with Plotters
//!
//! Each chart gets its own [`ChartCanvas`], opened right before drawing and
//! released when it goes out of scope, so nothing leaks from one chart into
//! the next.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Deserialize;

use super::axis::{AxisFormatter, DEFAULT_TICK_TARGET};
use crate::analysis::CleanedSeries;
use crate::error::{Error, Result};

/// Characters removed from column names before they enter a file name
pub const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Extension of the written images
pub const IMAGE_EXTENSION: &str = "png";

/// Height reserved below the x axis for category labels and the axis title
const X_LABEL_AREA: u32 = 160;

/// Category labels longer than this are cut with an ellipsis
const MAX_LABEL_CHARS: usize = 20;

/// Pixels between the x axis and the end of a category label
const LABEL_GAP: i32 = 6;

/// Half the width of a bar, in category units
const BAR_HALF_WIDTH: f64 = 0.4;

/// Strip the characters `< > : " / \ | ? *` from a name
///
/// Everything else is kept, so distinct names may collapse to the same
/// string (or to an empty one).
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect()
}

/// One bar chart: which columns it shows and the data to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub label_column: String,
    pub value_column: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSpec {
    pub fn new(
        label_column: impl Into<String>,
        value_column: impl Into<String>,
        series: CleanedSeries,
    ) -> Self {
        let (labels, values) = series.into_parts();
        Self {
            label_column: label_column.into(),
            value_column: value_column.into(),
            labels,
            values,
        }
    }

    /// `"<value> by <label>"`
    pub fn title(&self) -> String {
        format!("{} by {}", self.value_column, self.label_column)
    }

    /// `output_<value>_by_<label>.png` with both names sanitized
    pub fn file_name(&self) -> String {
        format!(
            "output_{}_by_{}.{}",
            sanitize_filename(&self.value_column),
            sanitize_filename(&self.label_column),
            IMAGE_EXTENSION
        )
    }
}

/// Chart appearance and destination
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Image width (pixels)
    pub width: u32,
    /// Image height (pixels)
    pub height: u32,
    /// Bar colour
    pub bar_color: (u8, u8, u8),
    /// Approximate number of y-axis ticks
    pub tick_target: usize,
    /// Draw horizontal grid lines
    pub show_grid: bool,
    /// Directory the images are written to
    pub output_dir: PathBuf,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            width: 1200,
            height: 600,
            bar_color: (31, 119, 180),
            tick_target: DEFAULT_TICK_TARGET,
            show_grid: true,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Drawing surface for a single chart
///
/// The image only stays on disk once [`ChartCanvas::save`] succeeds; a canvas
/// dropped before that leaves no file at its path.
pub struct ChartCanvas<'a> {
    root: DrawingArea<BitMapBackend<'a>, Shift>,
    // Dropped after `root`, whose backend writes the image on drop
    output: PendingImage<'a>,
}

struct PendingImage<'a> {
    path: &'a Path,
    saved: bool,
}

impl Drop for PendingImage<'_> {
    fn drop(&mut self) {
        if !self.saved && fs::remove_file(self.path).is_ok() {
            debug!("discarded unsaved chart {}", self.path.display());
        }
    }
}

impl<'a> ChartCanvas<'a> {
    /// Open a blank white canvas backed by `path`
    pub fn open(path: &'a Path, size: (u32, u32)) -> Result<Self> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        let canvas = Self {
            root,
            output: PendingImage { path, saved: false },
        };
        canvas.root.fill(&WHITE)?;
        Ok(canvas)
    }

    pub fn area(&self) -> &DrawingArea<BitMapBackend<'a>, Shift> {
        &self.root
    }

    /// Write the image and release the canvas
    pub fn save(mut self) -> Result<()> {
        self.root.present()?;
        self.output.saved = true;
        Ok(())
    }
}

/// Renders [`ChartSpec`]s as vertical bar charts
#[derive(Debug, Clone, Default)]
pub struct BarChartRenderer {
    settings: PlotSettings,
}

impl BarChartRenderer {
    pub fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    /// Where the chart for `spec` will be written
    pub fn output_path(&self, spec: &ChartSpec) -> PathBuf {
        self.settings.output_dir.join(spec.file_name())
    }

    /// Draw `spec` and save it, returning the written path
    ///
    /// An existing file at that path is overwritten.
    pub fn render(&self, spec: &ChartSpec) -> Result<PathBuf> {
        if spec.values.is_empty() {
            return Err(Error::EmptyData(format!(
                "no values to plot for '{}'",
                spec.value_column
            )));
        }
        if spec.labels.len() != spec.values.len() {
            return Err(Error::InvalidInput(format!(
                "{} labels for {} values",
                spec.labels.len(),
                spec.values.len()
            )));
        }

        let path = self.output_path(spec);
        let axis = AxisFormatter::for_values(&spec.values, self.settings.tick_target);

        let canvas = ChartCanvas::open(&path, (self.settings.width, self.settings.height))?;
        draw_bars(canvas.area(), spec, &axis, &self.settings)?;
        canvas.save()?;

        info!("saved chart '{}' to {}", spec.title(), path.display());
        Ok(path)
    }
}

/// Value range of the y axis; always includes zero so bars start at the baseline
fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max - min == 0.0 {
        return (0.0, 1.0);
    }

    let margin = (max - min) * 0.05;
    let low = if min < 0.0 { min - margin } else { 0.0 };
    let high = if max > 0.0 { max + margin } else { 0.0 };
    (low, high)
}

/// Shorten a category label to fit under the x axis
fn fit_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    axis: &AxisFormatter,
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (y_min, y_max) = value_range(&spec.values);
    // Bar i is centred on x = i
    let x_max = spec.values.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption(spec.title(), ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..x_max, y_min..y_max)?;

    let y_label = |v: &f64| axis.format_tick(*v);

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(0)
        .y_labels(axis.tick_target())
        .y_label_formatter(&y_label)
        .x_desc(spec.label_column.as_str())
        .y_desc(spec.value_column.as_str())
        .axis_desc_style(("sans-serif", 15))
        .disable_x_mesh();
    if !settings.show_grid {
        mesh.disable_y_mesh();
    }
    mesh.draw()?;

    let (r, g, b) = settings.bar_color;
    let bar_style = RGBColor(r, g, b).filled();
    chart.draw_series(spec.values.iter().enumerate().map(|(i, v)| {
        let x = i as f64;
        Rectangle::new([(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, *v)], bar_style)
    }))?;

    // Labels read bottom-to-top and end just below the axis, under their bar
    let label_style = TextStyle::from(("sans-serif", 12).into_font())
        .transform(FontTransform::Rotate270)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let (base_x, base_y) = area.get_base_pixel();
    for (i, label) in spec.labels.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(i as f64, y_min));
        area.draw_text(
            &fit_label(label),
            &label_style,
            (x - base_x, y - base_y + LABEL_GAP),
        )?;
    }

    Ok(())
}
