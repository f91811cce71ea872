//! # scorecard-core
//!
//! Document model for the scorecard workbook generator.
//!
//! This crate provides the structural types the generator assembles and the
//! writers serialize:
//! - [`CellValue`] and [`Cell`] - literal values, formulas, and their styles
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`Sheet`] - rows, column widths, freeze panes, conditional formats
//! - [`Table`] - a named structured range bound to one sheet
//! - [`Workbook`] - the ordered sheet list plus defined names
//!
//! All entities are built once and handed to a writer; nothing here has a
//! runtime lifecycle.
//!
//! ## Example
//!
//! ```rust
//! use scorecard_core::{Sheet, StyleId, Workbook};
//!
//! let mut sheet = Sheet::new("Summary");
//! sheet.set_value("A1", "Total", StyleId::Label).unwrap();
//! sheet.set_formula("B1", "SUM(B4:B6)", StyleId::Currency).unwrap();
//!
//! let mut workbook = Workbook::new();
//! workbook.add_sheet(sheet).unwrap();
//! ```

pub mod address;
pub mod cell;
pub mod column;
pub mod conditional_format;
pub mod error;
pub mod range;
pub mod sheet;
pub mod style;
pub mod table;
pub mod workbook;

// Re-exports for convenience
pub use address::CellAddress;
pub use cell::{Cell, CellValue};
pub use column::ColumnSpec;
pub use conditional_format::{CfOperator, CfRule, ConditionalFormat};
pub use error::{Error, Result};
pub use range::CellRange;
pub use sheet::{FreezePanes, Orientation, PageMargins, PageSetup, Row, Sheet};
pub use style::StyleId;
pub use table::Table;
pub use workbook::{DefinedName, Workbook};

/// Maximum length of a sheet name (Excel limit)
pub const MAX_SHEET_NAME_LEN: usize = 31;
