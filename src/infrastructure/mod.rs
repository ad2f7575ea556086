pub mod config;
pub mod csv;
pub mod document_source;
pub mod json;
pub mod storage;
