//! Column metadata

/// Width/visibility settings for a contiguous run of columns
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Start column index (0-based, inclusive)
    pub min: u16,
    /// End column index (0-based, inclusive)
    pub max: u16,
    /// Custom width in character units
    pub width: f64,
    /// Columns are hidden
    pub hidden: bool,
}

impl ColumnSpec {
    /// Create a spec covering columns `min..=max` with a custom width
    pub fn new(min: u16, max: u16, width: f64) -> Self {
        Self {
            min,
            max,
            width,
            hidden: false,
        }
    }

    /// Create a spec for a single column
    pub fn single(col: u16, width: f64) -> Self {
        Self::new(col, col, width)
    }

    /// Mark the columns hidden
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}
