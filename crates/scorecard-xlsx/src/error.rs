//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing the package
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] scorecard_core::Error),

    /// Workbook cannot be serialized as a consistent package
    #[error("Invalid workbook: {0}")]
    InvalidWorkbook(String),
}
