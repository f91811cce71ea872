//! Cell addressing (A1 notation)

use std::fmt;

use crate::error::{Error, Result};

/// A single cell address
///
/// Row and column indices are 0-based internally; A1 notation is 1-based for
/// rows. Absolute markers (`$`) are kept so defined-name targets round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: u16,
    /// Whether the row reference is absolute ($)
    pub row_absolute: bool,
    /// Whether the column reference is absolute ($)
    pub col_absolute: bool,
}

impl CellAddress {
    /// Create a new cell address with relative references
    pub fn new(row: u32, col: u16) -> Self {
        Self {
            row,
            col,
            row_absolute: false,
            col_absolute: false,
        }
    }

    /// Parse an A1-style address such as `B8` or `$A$1`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        let col_absolute = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(Error::InvalidAddress(format!("no column letters in '{}'", s)));
        }
        let col = Self::letters_to_column(&s[col_start..pos])
            .ok_or_else(|| Error::InvalidAddress(format!("bad column in '{}'", s)))?;

        let row_absolute = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let row_str = &s[pos..];
        let row_1based: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("bad row in '{}'", s)))?;
        if row_1based == 0 {
            return Err(Error::InvalidAddress(format!("row 0 in '{}'", s)));
        }

        Ok(Self {
            row: row_1based - 1,
            col,
            row_absolute,
            col_absolute,
        })
    }

    /// Render as an A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = String::new();
        if self.col_absolute {
            result.push('$');
        }
        result.push_str(&Self::column_to_letters(self.col));
        if self.row_absolute {
            result.push('$');
        }
        result.push_str(&(self.row + 1).to_string());
        result
    }

    /// Convert a 0-based column index to letters (0 -> "A", 25 -> "Z", 26 -> "AA")
    pub fn column_to_letters(col: u16) -> String {
        let mut n = col as u32 + 1;
        let mut letters = String::new();
        while n > 0 {
            let rem = ((n - 1) % 26) as u8;
            letters.insert(0, (b'A' + rem) as char);
            n = (n - 1) / 26;
        }
        letters
    }

    /// Convert column letters to a 0-based index ("A" -> 0)
    pub fn letters_to_column(letters: &str) -> Option<u16> {
        if letters.is_empty() {
            return None;
        }
        let mut col: u32 = 0;
        for b in letters.bytes() {
            let v = match b {
                b'A'..=b'Z' => (b - b'A') as u32,
                b'a'..=b'z' => (b - b'a') as u32,
                _ => return None,
            };
            col = col * 26 + v + 1;
        }
        u16::try_from(col - 1).ok()
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple() {
        let addr = CellAddress::parse("B8").unwrap();
        assert_eq!(addr.row, 7);
        assert_eq!(addr.col, 1);
        assert!(!addr.row_absolute);
        assert!(!addr.col_absolute);
    }

    #[test]
    fn test_parse_absolute() {
        let addr = CellAddress::parse("$A$1").unwrap();
        assert_eq!(addr.row, 0);
        assert_eq!(addr.col, 0);
        assert!(addr.row_absolute);
        assert!(addr.col_absolute);
        assert_eq!(addr.to_a1_string(), "$A$1");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("8B").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("A").is_err());
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(10), "K");
        assert_eq!(CellAddress::column_to_letters(12), "M");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");

        assert_eq!(CellAddress::letters_to_column("A"), Some(0));
        assert_eq!(CellAddress::letters_to_column("k"), Some(10));
        assert_eq!(CellAddress::letters_to_column("AA"), Some(26));
        assert_eq!(CellAddress::letters_to_column("A1"), None);
    }

    #[test]
    fn test_roundtrip() {
        for s in ["A1", "K35", "M4", "N2", "H7"] {
            assert_eq!(CellAddress::parse(s).unwrap().to_a1_string(), s);
        }
    }
}
