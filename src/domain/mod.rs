pub mod error;

// Review import/export module
pub mod review;
