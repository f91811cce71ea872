//! Error types for scorecard-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling the document model
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Duplicate table id across the workbook
    #[error("Table id {0} already used by table '{1}'")]
    DuplicateTableId(u32, String),

    /// Duplicate table name across the workbook
    #[error("Table name already exists: {0}")]
    DuplicateTableName(String),

    /// Table range width does not match its declared columns
    #[error("Table '{table}' declares {columns} columns but its range spans {width}")]
    TableColumnMismatch {
        table: String,
        columns: usize,
        width: u32,
    },
}
