//! Cell ranges

use std::fmt;

use crate::address::CellAddress;
use crate::error::{Error, Result};

/// A rectangular cell range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    /// Top-left cell
    pub start: CellAddress,
    /// Bottom-right cell (inclusive)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a range from two addresses
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Parse a range such as `A3:K35`, or a single reference such as `C12`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((a, b)) => {
                let start = CellAddress::parse(a)?;
                let end = CellAddress::parse(b)?;
                if end.row < start.row || end.col < start.col {
                    return Err(Error::InvalidRange(format!("inverted range '{}'", s)));
                }
                Ok(Self { start, end })
            }
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self {
                    start: addr,
                    end: addr,
                })
            }
        }
    }

    /// Number of columns spanned
    pub fn width(&self) -> u32 {
        (self.end.col - self.start.col) as u32 + 1
    }

    /// Number of rows spanned
    pub fn height(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Whether the range is a single cell
    pub fn is_single_cell(&self) -> bool {
        self.start.row == self.end.row && self.start.col == self.end.col
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Single-cell ranges render as a bare reference, matching sqref usage
        if self.is_single_cell() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_range() {
        let range = CellRange::parse("A3:K35").unwrap();
        assert_eq!(range.start.row, 2);
        assert_eq!(range.start.col, 0);
        assert_eq!(range.end.row, 34);
        assert_eq!(range.end.col, 10);
        assert_eq!(range.width(), 11);
        assert_eq!(range.height(), 33);
        assert_eq!(range.to_string(), "A3:K35");
    }

    #[test]
    fn test_single_cell() {
        let range = CellRange::parse("C12").unwrap();
        assert!(range.is_single_cell());
        assert_eq!(range.width(), 1);
        assert_eq!(range.height(), 1);
        assert_eq!(range.to_string(), "C12");
    }

    #[test]
    fn test_inverted_range() {
        assert!(CellRange::parse("B5:A1").is_err());
    }
}
