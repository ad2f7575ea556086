use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Review, StarRating};

/// Star-rating restriction applied before export and preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RatingFilter {
    #[default]
    All,
    Only(StarRating),
}

impl RatingFilter {
    /// Exact comparison against the raw rating text
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Only(rating) => review.star_rating() == Some(rating.token()),
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => f.write_str("all"),
            RatingFilter::Only(rating) => f.write_str(rating.token()),
        }
    }
}

impl FromStr for RatingFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(RatingFilter::All);
        }
        s.parse::<StarRating>().map(RatingFilter::Only)
    }
}

impl TryFrom<String> for RatingFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RatingFilter> for String {
    fn from(filter: RatingFilter) -> Self {
        filter.to_string()
    }
}
