// ============================================================
// REVIEW DOMAIN LAYER
// ============================================================
// Core types and value objects for review import and CSV export
// No I/O, no async

mod collection;
mod date_style;
mod export;
mod exporter_config;
mod field_selection;
mod ingest_outcome;
mod rating_filter;
mod review;

pub use collection::ReviewCollection;
pub use date_style::{DateStyle, DateZone};
pub use export::{
    ExportArtifact, ExportError, ExportPreview, EXPORT_FILE_NAME, EXPORT_MIME_TYPE, UTF8_BOM,
};
pub use exporter_config::{ExporterConfig, MergeOrder};
pub use field_selection::{header_label, FieldSelection, ReviewField};
pub use ingest_outcome::{IngestOutcome, IngestReport, IngestStatus};
pub use rating_filter::RatingFilter;
pub use review::{Review, Reviewer, StarRating};
