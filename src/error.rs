//! Error types for the pack converter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConverterError.
pub type Result<T> = std::result::Result<T, ConverterError>;

/// Main error type for pack conversion.
///
/// Only conditions that abort a whole pack are errors. Per-element,
/// per-override and texture problems are reported as values instead.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// Failed to read or write a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to parse or serialize JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input path is not something we can convert.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input file looked like a ZIP archive but could not be read.
    #[error("Invalid ZIP archive: {0}")]
    InvalidArchive(String),

    /// A Java model could not be turned into Bedrock geometry.
    #[error("Failed to convert model {path}: {reason}")]
    ModelConversion { path: PathBuf, reason: String },

    /// Failed to write the Bedrock pack.
    #[error("Export error: {0}")]
    Export(String),
}
