//! Workbook type - the top-level document structure

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::table::Table;
use crate::MAX_SHEET_NAME_LEN;

/// A defined name (print area, print titles, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct DefinedName {
    /// Name, e.g. `_xlnm.Print_Area`
    pub name: String,
    /// Sheet index this name is scoped to; `None` for workbook scope
    pub local_sheet_id: Option<usize>,
    /// Target reference, e.g. `Scorecard!$A$1:$F$14`
    pub refers_to: String,
}

/// A workbook: the ordered sheet list plus defined names
///
/// Sheets are serialized in insertion order; sheet ids and relationship ids
/// are derived from that order at write time.
#[derive(Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    defined_names: Vec<DefinedName>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Get the index of a sheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name() == name)
    }

    /// Iterate over all sheets in order
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Append a sheet
    ///
    /// Validates the sheet name and, when the sheet carries a bound table,
    /// that the table's id and name are unique workbook-wide.
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        self.validate_sheet_name(sheet.name())?;
        if let Some(table) = sheet.table() {
            self.validate_table(table)?;
        }
        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    /// Iterate bound tables as `(sheet index, table)`, in sheet order
    pub fn tables(&self) -> impl Iterator<Item = (usize, &Table)> {
        self.sheets
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.table().map(|t| (i, t)))
    }

    /// Define a sheet-scoped name
    pub fn define_name_for_sheet(
        &mut self,
        name: &str,
        refers_to: &str,
        sheet_index: usize,
    ) -> Result<()> {
        if sheet_index >= self.sheets.len() {
            return Err(Error::SheetNotFound(format!("index {}", sheet_index)));
        }
        self.defined_names.push(DefinedName {
            name: name.to_string(),
            local_sheet_id: Some(sheet_index),
            refers_to: refers_to.to_string(),
        });
        Ok(())
    }

    /// Defined names, in definition order
    pub fn defined_names(&self) -> &[DefinedName] {
        &self.defined_names
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("sheet name cannot be empty".into()));
        }
        if name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        for c in INVALID_CHARS {
            if name.contains(*c) {
                return Err(Error::InvalidSheetName(format!(
                    "sheet name cannot contain '{}'",
                    c
                )));
            }
        }

        // Duplicate check is case-insensitive, matching Excel
        let name_lower = name.to_lowercase();
        if self
            .sheets
            .iter()
            .any(|s| s.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    fn validate_table(&self, table: &Table) -> Result<()> {
        for (_, existing) in self.tables() {
            if existing.id() == table.id() {
                return Err(Error::DuplicateTableId(
                    table.id(),
                    existing.name().to_string(),
                ));
            }
            if existing.name() == table.name() {
                return Err(Error::DuplicateTableName(table.name().to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::CellRange;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sheets_keep_insertion_order() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Assumptions")).unwrap();
        wb.add_sheet(Sheet::new("Forecast")).unwrap();
        wb.add_sheet(Sheet::new("Daily_Inputs")).unwrap();

        let names: Vec<&str> = wb.sheets().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Assumptions", "Forecast", "Daily_Inputs"]);
        assert_eq!(wb.sheet_index("Forecast"), Some(1));
        assert!(wb.sheet_by_name("Cashflow").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Scorecard")).unwrap();
        assert!(wb.add_sheet(Sheet::new("SCORECARD")).is_err());
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();
        assert!(wb.add_sheet(Sheet::new("")).is_err());
        assert!(wb.add_sheet(Sheet::new("Bad/Name")).is_err());
        assert!(wb.add_sheet(Sheet::new("Bad[Name]")).is_err());
        assert!(wb.add_sheet(Sheet::new("A".repeat(32))).is_err());
    }

    #[test]
    fn test_duplicate_table_id_rejected() {
        let range = CellRange::parse("A3:B4").unwrap();
        let cols = vec!["X".to_string(), "Y".to_string()];

        let mut first = Sheet::new("One");
        first.bind_table(Table::new(1, "tblOne", range, cols.clone()).unwrap());

        let mut second = Sheet::new("Two");
        second.bind_table(Table::new(1, "tblTwo", range, cols).unwrap());

        let mut wb = Workbook::new();
        wb.add_sheet(first).unwrap();
        assert!(matches!(
            wb.add_sheet(second),
            Err(Error::DuplicateTableId(1, _))
        ));
    }

    #[test]
    fn test_defined_name_requires_existing_sheet() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Scorecard")).unwrap();
        wb.define_name_for_sheet("_xlnm.Print_Area", "Scorecard!$A$1:$F$14", 0)
            .unwrap();
        assert!(wb
            .define_name_for_sheet("_xlnm.Print_Titles", "Scorecard!$3:$3", 5)
            .is_err());
        assert_eq!(wb.defined_names().len(), 1);
    }
}
