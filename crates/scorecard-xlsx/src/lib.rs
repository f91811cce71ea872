//! # scorecard-xlsx
//!
//! Serializes a [`scorecard_core::Workbook`] into an XLSX package: a ZIP
//! archive of SpreadsheetML parts with a consistent manifest and
//! relationship graph. Write-only; the generator never reads packages back.

mod error;
mod styles;
mod writer;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
