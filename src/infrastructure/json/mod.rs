// ============================================================
// JSON INFRASTRUCTURE LAYER
// ============================================================
// Review document decoding and best-effort field extraction

mod review_document;

pub use review_document::{decode_document, parse_document, review_from_value, ReviewDocument};
