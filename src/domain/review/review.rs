// ============================================================
// REVIEW RECORD
// ============================================================
// A single customer review with every member optional

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated star rating tokens as they appear in review exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StarRating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl StarRating {
    pub const ALL: [StarRating; 5] = [
        StarRating::One,
        StarRating::Two,
        StarRating::Three,
        StarRating::Four,
        StarRating::Five,
    ];

    /// Wire token (`"ONE"` .. `"FIVE"`)
    pub fn token(&self) -> &'static str {
        match self {
            StarRating::One => "ONE",
            StarRating::Two => "TWO",
            StarRating::Three => "THREE",
            StarRating::Four => "FOUR",
            StarRating::Five => "FIVE",
        }
    }

    /// Single-digit representation used in exported rows
    pub fn digit(&self) -> &'static str {
        match self {
            StarRating::One => "1",
            StarRating::Two => "2",
            StarRating::Three => "3",
            StarRating::Four => "4",
            StarRating::Five => "5",
        }
    }

    /// Exact token lookup. Review data is matched case-sensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rating| rating.token() == token)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Lenient parse for user input: accepts `five`, `FIVE` or `5`.
impl FromStr for StarRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|rating| {
                rating.token().eq_ignore_ascii_case(trimmed) || rating.digit() == trimmed
            })
            .ok_or_else(|| format!("unknown star rating '{}'", trimmed))
    }
}

/// Review author block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Reviewer {
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
        }
    }
}

/// One review. Never mutated once it is part of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<Reviewer>,

    /// Raw rating text; unrecognized values are kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// ISO-8601 timestamp text, parsed only when rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl Review {
    pub fn display_name(&self) -> Option<&str> {
        self.reviewer
            .as_ref()
            .and_then(|reviewer| reviewer.display_name.as_deref())
    }

    pub fn star_rating(&self) -> Option<&str> {
        self.star_rating.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn create_time(&self) -> Option<&str> {
        self.create_time.as_deref()
    }

    /// Recognized rating, if the raw text is one of the five tokens
    pub fn rating(&self) -> Option<StarRating> {
        self.star_rating().and_then(StarRating::from_token)
    }

    /// Rating cell text: digit for known tokens, raw text otherwise, empty when absent
    pub fn rating_cell(&self) -> &str {
        match self.rating() {
            Some(rating) => rating.digit(),
            None => self.star_rating().unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_cell_maps_known_tokens() {
        let review = Review {
            star_rating: Some("FIVE".to_string()),
            ..Default::default()
        };
        assert_eq!(review.rating_cell(), "5");
        assert_eq!(review.rating(), Some(StarRating::Five));
    }

    #[test]
    fn test_rating_cell_passes_unknown_through() {
        let review = Review {
            star_rating: Some("SIX".to_string()),
            ..Default::default()
        };
        assert_eq!(review.rating_cell(), "SIX");
        assert_eq!(review.rating(), None);
    }

    #[test]
    fn test_rating_cell_absent_is_empty() {
        assert_eq!(Review::default().rating_cell(), "");
    }

    #[test]
    fn test_tokens_are_case_sensitive_in_data() {
        assert_eq!(StarRating::from_token("five"), None);
        assert_eq!(StarRating::from_token("FIVE"), Some(StarRating::Five));
    }

    #[test]
    fn test_user_input_parse_is_lenient() {
        assert_eq!("five".parse::<StarRating>(), Ok(StarRating::Five));
        assert_eq!("3".parse::<StarRating>(), Ok(StarRating::Three));
        assert!("6".parse::<StarRating>().is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let review: Review = serde_json::from_str(
            r#"{"reviewer":{"displayName":"Ana"},"starRating":"TWO","createTime":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(review.display_name(), Some("Ana"));
        assert_eq!(review.star_rating(), Some("TWO"));
        assert_eq!(review.comment(), None);
        assert_eq!(review.create_time(), Some("2025-01-01T00:00:00Z"));
    }
}
