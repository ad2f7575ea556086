// ============================================================
// EXPORTER CONFIGURATION
// ============================================================
// Tunable values for ingest ordering, preview and CSV rendering

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{DateStyle, FieldSelection, RatingFilter, EXPORT_FILE_NAME};

/// Order in which merged documents contribute their reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeOrder {
    /// Order the documents were submitted in (deterministic)
    #[default]
    Submission,

    /// Order the documents finished reading in
    Completion,
}

/// Configuration for the review exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// Where `export` writes the CSV (default: `reviews-export.csv`)
    pub output_path: PathBuf,

    /// Rows shown by `preview` (default: 5)
    pub preview_limit: usize,

    pub merge_order: MergeOrder,

    /// Rendering of the `createTime` column
    pub date: DateStyle,

    /// Fields selected when none are given explicitly
    pub default_fields: FieldSelection,

    /// Rating filter used when none is given explicitly
    pub default_filter: RatingFilter,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(EXPORT_FILE_NAME),
            preview_limit: 5,
            merge_order: MergeOrder::Submission,
            date: DateStyle::default(),
            default_fields: FieldSelection::default(),
            default_filter: RatingFilter::All,
        }
    }
}

impl ExporterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.preview_limit == 0 {
            return Err("preview_limit must be > 0".to_string());
        }
        if self.output_path.file_name().is_none() {
            return Err(format!(
                "output_path '{}' does not name a file",
                self.output_path.display()
            ));
        }
        self.date.validate()
    }
}
