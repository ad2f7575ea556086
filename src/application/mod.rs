pub mod use_cases;

pub use use_cases::review_export::ExportSerializer;
pub use use_cases::review_ingest::IngestMerger;
pub use use_cases::review_session::ReviewSession;
pub use use_cases::sample_data::sample_collection;
