//! Sheet type

use std::collections::BTreeMap;

use crate::address::CellAddress;
use crate::cell::{Cell, CellValue};
use crate::column::ColumnSpec;
use crate::conditional_format::ConditionalFormat;
use crate::error::Result;
use crate::style::StyleId;
use crate::table::Table;

/// One row of cells, keyed by column index
#[derive(Debug, Default, Clone)]
pub struct Row {
    cells: BTreeMap<u16, Cell>,
}

impl Row {
    /// Iterate cells in column order
    pub fn cells(&self) -> impl Iterator<Item = (u16, &Cell)> {
        self.cells.iter().map(|(col, cell)| (*col, cell))
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells.get(&col)
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Frozen-pane settings
///
/// Mirrors the `<pane>` element: split counts plus the first scrollable cell.
#[derive(Debug, Clone, PartialEq)]
pub struct FreezePanes {
    /// Number of frozen columns
    pub x_split: u16,
    /// Number of frozen rows
    pub y_split: u32,
    /// Top-left cell of the scrollable pane
    pub top_left: CellAddress,
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Portrait (default)
    Portrait,
    /// Landscape
    Landscape,
}

impl Orientation {
    /// XLSX attribute value
    pub fn xlsx_name(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Print margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            left: 0.3,
            right: 0.3,
            top: 0.5,
            bottom: 0.5,
            header: 0.3,
            footer: 0.3,
        }
    }
}

/// Print settings for a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    /// Page orientation
    pub orientation: Orientation,
    /// Scale to this many pages wide (`fitToWidth`)
    pub fit_to_width: u32,
    /// Scale to this many pages tall; 0 means "as many as needed"
    pub fit_to_height: u32,
    /// Print margins
    pub margins: PageMargins,
}

impl PageSetup {
    /// Landscape, one page wide, unlimited height
    pub fn landscape_fit_width() -> Self {
        Self {
            orientation: Orientation::Landscape,
            fit_to_width: 1,
            fit_to_height: 0,
            margins: PageMargins::default(),
        }
    }
}

/// A sheet: ordered rows plus layout metadata and an optional bound table
#[derive(Debug)]
pub struct Sheet {
    name: String,
    // BTreeMap keeps rows in row-number order regardless of insertion order
    rows: BTreeMap<u32, Row>,
    columns: Vec<ColumnSpec>,
    freeze: Option<FreezePanes>,
    page_setup: Option<PageSetup>,
    conditional_formats: Vec<ConditionalFormat>,
    table: Option<Table>,
}

impl Sheet {
    /// Create an empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            columns: Vec::new(),
            freeze: None,
            page_setup: None,
            conditional_formats: Vec::new(),
            table: None,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell access ===

    /// Set a literal value at an A1 address
    pub fn set_value<V: Into<CellValue>>(
        &mut self,
        address: &str,
        value: V,
        style: StyleId,
    ) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_at(addr.row, addr.col, Cell::new(value, style));
        Ok(())
    }

    /// Set a formula at an A1 address (leading `=` is stripped)
    pub fn set_formula(&mut self, address: &str, formula: &str, style: StyleId) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_at(
            addr.row,
            addr.col,
            Cell {
                value: CellValue::formula(formula),
                style,
            },
        );
        Ok(())
    }

    /// Set a style-only empty cell at an A1 address
    pub fn set_blank(&mut self, address: &str, style: StyleId) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_at(addr.row, addr.col, Cell::blank(style));
        Ok(())
    }

    /// Set a cell by 0-based row/column indices
    pub fn set_cell_at(&mut self, row: u32, col: u16, cell: Cell) {
        self.rows.entry(row).or_default().cells.insert(col, cell);
    }

    /// Get a cell by A1 address
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell by 0-based row/column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.cells.get(&col))
    }

    /// Iterate rows in ascending row order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &Row)> {
        self.rows.iter().map(|(row, cells)| (*row, cells))
    }

    /// Iterate every formula on the sheet
    pub fn formulas(&self) -> impl Iterator<Item = &str> {
        self.rows
            .values()
            .flat_map(|row| row.cells.values())
            .filter_map(|cell| cell.value.formula_text())
    }

    // === Layout metadata ===

    /// Replace the column-width specs
    pub fn set_columns(&mut self, columns: Vec<ColumnSpec>) {
        self.columns = columns;
    }

    /// Column-width specs
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Freeze the leading `cols` columns and `rows` rows
    pub fn freeze(&mut self, cols: u16, rows: u32) {
        self.freeze = Some(FreezePanes {
            x_split: cols,
            y_split: rows,
            top_left: CellAddress::new(rows, cols),
        });
    }

    /// Frozen-pane settings, if any
    pub fn freeze_panes(&self) -> Option<&FreezePanes> {
        self.freeze.as_ref()
    }

    /// Set print settings
    pub fn set_page_setup(&mut self, setup: PageSetup) {
        self.page_setup = Some(setup);
    }

    /// Print settings, if any
    pub fn page_setup(&self) -> Option<&PageSetup> {
        self.page_setup.as_ref()
    }

    /// Append a conditional formatting rule
    pub fn add_conditional_format(&mut self, rule: ConditionalFormat) {
        self.conditional_formats.push(rule);
    }

    /// Conditional formatting rules, in insertion order
    pub fn conditional_formats(&self) -> &[ConditionalFormat] {
        &self.conditional_formats
    }

    /// Bind a table to this sheet
    pub fn bind_table(&mut self, table: Table) {
        self.table = Some(table);
    }

    /// The bound table, if any
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rows_iterate_in_order_regardless_of_insertion() {
        let mut sheet = Sheet::new("Test");
        sheet.set_value("A17", "late", StyleId::Label).unwrap();
        sheet.set_value("A1", "first", StyleId::Title).unwrap();
        sheet.set_value("A8", "middle", StyleId::Total).unwrap();

        let rows: Vec<u32> = sheet.rows().map(|(r, _)| r).collect();
        assert_eq!(rows, vec![0, 7, 16]);
    }

    #[test]
    fn test_cells_iterate_in_column_order() {
        let mut sheet = Sheet::new("Test");
        sheet.set_value("F3", "f", StyleId::Header).unwrap();
        sheet.set_value("A3", "a", StyleId::Header).unwrap();
        sheet.set_value("C3", "c", StyleId::Header).unwrap();

        let (_, row) = sheet.rows().next().unwrap();
        let cols: Vec<u16> = row.cells().map(|(c, _)| c).collect();
        assert_eq!(cols, vec![0, 2, 5]);
    }

    #[test]
    fn test_formula_iteration() {
        let mut sheet = Sheet::new("Test");
        sheet.set_value("A1", "label", StyleId::Label).unwrap();
        sheet
            .set_formula("B8", "SUM(B4:B6)", StyleId::Total)
            .unwrap();
        sheet
            .set_formula("B3", "Assumptions!B8", StyleId::Int)
            .unwrap();

        let mut formulas: Vec<&str> = sheet.formulas().collect();
        formulas.sort_unstable();
        assert_eq!(formulas, vec!["Assumptions!B8", "SUM(B4:B6)"]);
    }

    #[test]
    fn test_freeze_computes_top_left() {
        let mut sheet = Sheet::new("Test");
        sheet.freeze(1, 3);
        let freeze = sheet.freeze_panes().unwrap();
        assert_eq!(freeze.x_split, 1);
        assert_eq!(freeze.y_split, 3);
        assert_eq!(freeze.top_left.to_a1_string(), "B4");
    }
}
