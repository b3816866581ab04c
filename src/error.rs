//! Error types for sprintdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for sprintdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or writing a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error from the zip container layer.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error while writing XML package parts.
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error while parsing XML package parts.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A table row does not have as many cells as the header.
    #[error("Table row {row} has {found} cells, expected {expected}")]
    ColumnMismatch {
        /// Zero-based index of the offending data row
        row: usize,
        /// Column count fixed by the header (or first row)
        expected: usize,
        /// Cell count of the offending row
        found: usize,
    },

    /// A required part is missing from a .docx package.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// A date string could not be parsed.
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// The requested output format is not known.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
