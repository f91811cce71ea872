//! Cell values

use std::fmt;

use crate::style::StyleId;

/// The value stored in a cell
///
/// A cell holds either a literal value or a formula, never both; the enum
/// makes the two mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (style-only when paired with a non-default style)
    Empty,

    /// Numeric value
    Number(f64),

    /// String value
    String(String),

    /// Formula text, without a leading `=`
    Formula(String),
}

impl CellValue {
    /// Create a formula value, stripping a leading `=` if present
    pub fn formula<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        match text.strip_prefix('=') {
            Some(stripped) => CellValue::Formula(stripped.to_string()),
            None => CellValue::Formula(text),
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Formula(text) => Some(text),
            _ => None,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Formula(text) => write!(f, "={}", text),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

/// A cell: a value (or formula) plus its style
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Value or formula
    pub value: CellValue,
    /// Style from the fixed registry
    pub style: StyleId,
}

impl Cell {
    /// Create a cell from a value and style
    pub fn new<V: Into<CellValue>>(value: V, style: StyleId) -> Self {
        Self {
            value: value.into(),
            style,
        }
    }

    /// Create a style-only empty cell
    pub fn blank(style: StyleId) -> Self {
        Self {
            value: CellValue::Empty,
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(0.65), CellValue::Number(0.65));
        assert_eq!(CellValue::from("Totals").as_string(), Some("Totals"));
    }

    #[test]
    fn test_formula_strips_equals() {
        assert_eq!(
            CellValue::formula("=SUM(B4:B6)").formula_text(),
            Some("SUM(B4:B6)")
        );
        assert_eq!(
            CellValue::formula("SUM(B4:B6)").formula_text(),
            Some("SUM(B4:B6)")
        );
    }

    #[test]
    fn test_value_formula_exclusive() {
        let formula = CellValue::formula("B6*B5*B7");
        assert!(formula.is_formula());
        assert_eq!(formula.as_number(), None);
        assert_eq!(formula.as_string(), None);
    }
}
