//! Module providing chart rendering
//!
//! - `axis`: magnitude-aware y-axis tick labels
//! - `plotters_ext`: PNG bar charts drawn with Plotters

pub mod axis;
pub mod plotters_ext;

pub use self::axis::{AxisFormatter, Magnitude, DEFAULT_TICK_TARGET};
pub use self::plotters_ext::{
    sanitize_filename, BarChartRenderer, ChartCanvas, ChartSpec, PlotSettings,
    FORBIDDEN_FILENAME_CHARS, IMAGE_EXTENSION,
};
