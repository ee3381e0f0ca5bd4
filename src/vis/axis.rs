//! Y-axis tick formatting
//!
//! One magnitude is picked for the whole axis from the largest absolute
//! value, so every tick carries the same suffix.

/// Default number of major ticks requested from the tick layout
pub const DEFAULT_TICK_TARGET: usize = 6;

/// Scale applied to axis tick labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Billions,
    Millions,
    Thousands,
    Units,
}

impl Magnitude {
    /// Pick the magnitude for a maximum absolute value (thresholds inclusive)
    pub fn from_max_abs(max_abs: f64) -> Self {
        if max_abs >= 1e9 {
            Magnitude::Billions
        } else if max_abs >= 1e6 {
            Magnitude::Millions
        } else if max_abs >= 1e3 {
            Magnitude::Thousands
        } else {
            Magnitude::Units
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            Magnitude::Billions => 1e9,
            Magnitude::Millions => 1e6,
            Magnitude::Thousands => 1e3,
            Magnitude::Units => 1.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Magnitude::Billions => "B",
            Magnitude::Millions => "M",
            Magnitude::Thousands => "K",
            Magnitude::Units => "",
        }
    }

    /// Decimal places printed for a tick
    pub fn decimals(self) -> usize {
        match self {
            Magnitude::Units => 0,
            _ => 1,
        }
    }
}

/// Formats y-axis ticks and carries the tick-count target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFormatter {
    magnitude: Magnitude,
    tick_target: usize,
}

impl AxisFormatter {
    /// Derive the formatter from the plotted values
    pub fn for_values(values: &[f64], tick_target: usize) -> Self {
        Self {
            magnitude: Magnitude::from_max_abs(max_abs(values)),
            tick_target,
        }
    }

    pub fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    /// Approximate number of major ticks to lay out
    pub fn tick_target(&self) -> usize {
        self.tick_target
    }

    /// Render one tick value
    pub fn format_tick(&self, value: f64) -> String {
        format!(
            "{:.*}{}",
            self.magnitude.decimals(),
            value / self.magnitude.divisor(),
            self.magnitude.suffix()
        )
    }
}

/// Largest absolute value, 0 for an empty slice
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}
