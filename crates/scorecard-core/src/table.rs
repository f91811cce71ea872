//! Bound tables
//!
//! A table is a named, structured range with declared header columns,
//! recognized by spreadsheet applications for filtering and striping. Each
//! table is bound to exactly one sheet; the XLSX writer emits one table part
//! per table and binds it through the sheet's relationship file.

use crate::error::{Error, Result};
use crate::range::CellRange;

/// A named structured range
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    id: u32,
    name: String,
    range: CellRange,
    columns: Vec<String>,
}

impl Table {
    /// Create a table
    ///
    /// The range's first row is the header row; its width must match the
    /// number of declared columns.
    pub fn new<S: Into<String>>(
        id: u32,
        name: S,
        range: CellRange,
        columns: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if range.width() as usize != columns.len() {
            return Err(Error::TableColumnMismatch {
                table: name,
                columns: columns.len(),
                width: range.width(),
            });
        }
        Ok(Self {
            id,
            name,
            range,
            columns,
        })
    }

    /// Workbook-unique table id; also names the table part (`tableN.xml`)
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Table name (used as both `name` and `displayName`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structured range, header row included
    pub fn range(&self) -> &CellRange {
        &self.range
    }

    /// Declared header column names, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_must_match_width() {
        let range = CellRange::parse("A3:F6").unwrap();
        let ok = Table::new(2, "tblForecast", range, vec!["a".into(); 6]);
        assert!(ok.is_ok());

        let err = Table::new(2, "tblForecast", range, vec!["a".into(); 5]);
        assert!(matches!(
            err,
            Err(Error::TableColumnMismatch {
                columns: 5,
                width: 6,
                ..
            })
        ));
    }
}
