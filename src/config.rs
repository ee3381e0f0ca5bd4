//! Run configuration
//!
//! All settings have defaults matching the built-in heuristics; a TOML file
//! only needs the keys it changes:
//!
//! ```toml
//! [classifier]
//! numeric_ratio = 0.6
//!
//! [cleaner]
//! max_rows = 20
//!
//! [chart]
//! width = 1600
//! output_dir = "charts"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::analysis::{ClassifierConfig, CleanerConfig};
use crate::error::{Error, Result};
use crate::vis::PlotSettings;

/// Settings for a whole run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutochartConfig {
    pub classifier: ClassifierConfig,
    pub cleaner: CleanerConfig,
    pub chart: PlotSettings,
}

impl AutochartConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AutochartConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let classifier = &self.classifier;
        if !(classifier.numeric_ratio > 0.0 && classifier.numeric_ratio <= 1.0) {
            return Err(Error::Config(format!(
                "classifier.numeric_ratio must be in (0, 1], got {}",
                classifier.numeric_ratio
            )));
        }
        if !(classifier.uniqueness_ratio >= 0.0 && classifier.uniqueness_ratio < 1.0) {
            return Err(Error::Config(format!(
                "classifier.uniqueness_ratio must be in [0, 1), got {}",
                classifier.uniqueness_ratio
            )));
        }
        if classifier.placeholder_marker.is_empty() {
            return Err(Error::Config(
                "classifier.placeholder_marker must not be empty".to_string(),
            ));
        }
        if self.cleaner.max_rows == 0 {
            return Err(Error::Config("cleaner.max_rows must be positive".to_string()));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(Error::Config(format!(
                "chart size must be positive, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        if self.chart.tick_target == 0 {
            return Err(Error::Config("chart.tick_target must be positive".to_string()));
        }
        Ok(())
    }
}
