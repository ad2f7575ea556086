pub mod review_export;
pub mod review_ingest;
pub mod review_session;
pub mod sample_data;
