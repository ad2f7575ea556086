// ============================================================
// EXPORT TYPES
// ============================================================
// Result and error values produced by the CSV export

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default download name for exported reviews
pub const EXPORT_FILE_NAME: &str = "reviews-export.csv";

/// MIME type of the exported artifact
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Byte-order mark written ahead of the header row
pub const UTF8_BOM: char = '\u{feff}';

/// Why an export request produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportError {
    /// No collection loaded, or the collection has no reviews
    EmptyCollection,

    /// Every field in the selection is off
    NoFieldsSelected,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptyCollection => write!(f, "no reviews loaded"),
            ExportError::NoFieldsSelected => write!(f, "no fields selected"),
        }
    }
}

impl std::error::Error for ExportError {}

/// A serialized export, ready to be saved by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    /// Suggested file name
    pub file_name: String,

    /// MIME type for the payload
    pub mime_type: String,

    /// UTF-8 CSV bytes, BOM included
    pub bytes: Vec<u8>,

    /// Number of data rows (header excluded)
    pub row_count: usize,
}

impl ExportArtifact {
    pub fn new(csv: String, row_count: usize) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            bytes: csv.into_bytes(),
            row_count,
        }
    }

    /// CSV text, BOM included
    pub fn text(&self) -> &str {
        // Built from a String in `new`, so always valid UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// First rows of the filtered view, rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPreview {
    /// Labels of the selected columns
    pub headers: Vec<String>,

    /// Rendered cell values, unquoted
    pub rows: Vec<Vec<String>>,

    /// Reviews passing the rating filter
    pub filtered_count: usize,

    /// Reviews in the collection
    pub total_count: usize,
}

impl ExportPreview {
    /// `Showing N of M reviews` style summary line
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} reviews ({} total)",
            self.rows.len(),
            self.filtered_count,
            self.total_count
        )
    }
}
