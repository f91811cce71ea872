//! # scorecard-csv
//!
//! Writes the flat entry templates: delimited files containing exactly one
//! header row and no data rows.

mod error;
mod options;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvWriteOptions, LineTerminator};
pub use writer::TemplateWriter;
