// ============================================================
// REVIEW DOCUMENT PARSER
// ============================================================
// Decode raw document bytes and pull out the `reviews` array

use encoding_rs::{Encoding, UTF_8};
use serde_json::Value;

use crate::domain::error::AppError;
use crate::domain::review::{Review, Reviewer};

/// Reviews extracted from one parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDocument {
    /// `reviews` was present and an array
    Reviews(Vec<Review>),

    /// Valid JSON without a usable `reviews` array
    NoReviews,
}

impl ReviewDocument {
    pub fn review_count(&self) -> usize {
        match self {
            ReviewDocument::Reviews(reviews) => reviews.len(),
            ReviewDocument::NoReviews => 0,
        }
    }

    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewDocument::Reviews(reviews) => reviews,
            ReviewDocument::NoReviews => Vec::new(),
        }
    }
}

/// Decode document bytes to text.
///
/// A byte-order mark selects UTF-8 / UTF-16LE / UTF-16BE; anything else
/// is read as UTF-8 with invalid sequences replaced.
pub fn decode_document(bytes: &[u8]) -> String {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let (text, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    text.into_owned()
}

/// Parse one document's text into its reviews
pub fn parse_document(content: &str) -> Result<ReviewDocument, AppError> {
    let root: Value = serde_json::from_str(content)
        .map_err(|e| AppError::ParseError(format!("Invalid JSON: {}", e)))?;

    match root.get("reviews") {
        Some(Value::Array(items)) => Ok(ReviewDocument::Reviews(
            items.iter().map(review_from_value).collect(),
        )),
        _ => Ok(ReviewDocument::NoReviews),
    }
}

/// Best-effort extraction of a review from any JSON value.
///
/// Non-object values become an all-absent review so the element still counts.
pub fn review_from_value(value: &Value) -> Review {
    let reviewer = value.get("reviewer").and_then(|reviewer| {
        reviewer.as_object().map(|_| Reviewer {
            display_name: text_field(reviewer, "displayName"),
        })
    });

    Review {
        reviewer,
        star_rating: text_field(value, "starRating"),
        comment: text_field(value, "comment"),
        create_time: text_field(value, "createTime"),
    }
}

/// Scalar field as text; null, arrays and objects count as absent
fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
