use std::collections::HashSet;
use std::fmt;

/// A single table cell
///
/// Readers produce cells from raw text; numbers are only ever obtained
/// through [`coerce_numeric`], so a failed parse simply becomes a missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Numeric value (NaN counts as missing)
    Number(f64),
    /// No value in the source
    Missing,
}

impl Cell {
    /// Build a cell from raw source text
    ///
    /// Blank text becomes `Missing`, finite numbers become `Number`, anything
    /// else is kept verbatim as `Text`.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_thousands(raw, None)
    }

    /// Like [`Cell::parse`], but strips a thousands separator before trying
    /// the numeric parse (`"1,234"` becomes `1234`)
    pub fn parse_with_thousands(raw: &str, thousands: Option<char>) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }

        if let Some(value) = parse_finite(trimmed) {
            return Cell::Number(value);
        }

        if let Some(sep) = thousands {
            if trimmed.contains(sep) {
                let stripped: String = trimmed.chars().filter(|&c| c != sep).collect();
                if let Some(value) = parse_finite(&stripped) {
                    return Cell::Number(value);
                }
            }
        }

        Cell::Text(trimmed.to_string())
    }

    /// Whether the cell holds no usable value
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Number(v) => v.is_nan(),
            Cell::Text(_) => false,
        }
    }

    /// Display string used for category labels
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

/// Coerce a cell to a number
///
/// Total: every cell maps to either a finite number or `None`.
pub fn coerce_numeric(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(v) if v.is_finite() => Some(*v),
        Cell::Number(_) => None,
        Cell::Text(s) => parse_finite(s.trim()),
        Cell::Missing => None,
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(v) if v.is_nan() => write!(f, "nan"),
            // Integral values print without a fractional part
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Missing => write!(f, "nan"),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Missing, Into::into)
    }
}

/// Raw column identifier as it comes out of a reader
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Header {
    /// Single header row
    Flat(String),
    /// One entry per header row, outermost first
    MultiLevel(Vec<String>),
}

impl From<&str> for Header {
    fn from(value: &str) -> Self {
        Header::Flat(value.to_string())
    }
}

impl From<String> for Header {
    fn from(value: String) -> Self {
        Header::Flat(value)
    }
}

impl From<Vec<String>> for Header {
    fn from(parts: Vec<String>) -> Self {
        Header::MultiLevel(parts)
    }
}

impl From<&[&str]> for Header {
    fn from(parts: &[&str]) -> Self {
        Header::MultiLevel(parts.iter().map(|s| s.to_string()).collect())
    }
}

/// A named, ordered sequence of cells
///
/// `H` is the header type: [`Header`] for raw tables, `String` once normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<H = String> {
    header: H,
    cells: Vec<Cell>,
}

impl<H> Column<H> {
    /// Create a column from a header and its cells
    pub fn new(header: impl Into<H>, cells: Vec<Cell>) -> Self {
        Self {
            header: header.into(),
            cells,
        }
    }

    /// Column header
    pub fn header(&self) -> &H {
        &self.header
    }

    /// All cells in row order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the column has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every cell coerced to a number, `None` where coercion fails
    pub fn numeric_values(&self) -> Vec<Option<f64>> {
        self.cells.iter().map(coerce_numeric).collect()
    }

    /// Count of cells that coerce to a number
    pub fn numeric_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| coerce_numeric(cell).is_some())
            .count()
    }

    /// Number of distinct non-missing values, compared by display string
    pub fn distinct_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.is_missing())
            .map(Cell::display_string)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Replace the header, keeping the cells
    pub fn map_header<G>(self, f: impl FnOnce(H) -> G) -> Column<G> {
        Column {
            header: f(self.header),
            cells: self.cells,
        }
    }
}

impl Column<String> {
    /// Column name
    pub fn name(&self) -> &str {
        &self.header
    }
}
