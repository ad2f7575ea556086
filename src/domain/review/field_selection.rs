// ============================================================
// FIELD SELECTION
// ============================================================
// Which review columns end up in the export, and in what order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exportable review columns, in declaration (= column) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewField {
    StarRating,
    Comment,
    Reviewer,
    CreateTime,
}

impl ReviewField {
    pub const ALL: [ReviewField; 4] = [
        ReviewField::StarRating,
        ReviewField::Comment,
        ReviewField::Reviewer,
        ReviewField::CreateTime,
    ];

    /// Field name as it appears in review documents
    pub fn name(&self) -> &'static str {
        match self {
            ReviewField::StarRating => "starRating",
            ReviewField::Comment => "comment",
            ReviewField::Reviewer => "reviewer",
            ReviewField::CreateTime => "createTime",
        }
    }

    /// Header label for the exported column
    pub fn label(&self) -> String {
        header_label(self.name())
    }

    fn index(&self) -> usize {
        match self {
            ReviewField::StarRating => 0,
            ReviewField::Comment => 1,
            ReviewField::Reviewer => 2,
            ReviewField::CreateTime => 3,
        }
    }
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReviewField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| {
                field.name().eq_ignore_ascii_case(wanted)
                    || field.name().eq_ignore_ascii_case(&wanted.replace(&['_', '-'][..], ""))
            })
            .ok_or_else(|| format!("unknown field '{}'", wanted))
    }
}

/// Header label for a field name.
///
/// Known names get their fixed labels; anything else is the name with
/// its first character upper-cased.
pub fn header_label(name: &str) -> String {
    match name {
        "starRating" => "Star Rating".to_string(),
        "comment" => "Comment".to_string(),
        "reviewer" => "Reviewer Name".to_string(),
        "createTime" => "Date Created".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Field name → selected flag over the fixed review field set.
///
/// Column order never depends on the order fields were toggled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSelection {
    pub star_rating: bool,
    pub comment: bool,
    pub reviewer: bool,
    pub create_time: bool,
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self {
            star_rating: true,
            comment: true,
            reviewer: false,
            create_time: false,
        }
    }
}

impl FieldSelection {
    pub fn all() -> Self {
        Self::only(&ReviewField::ALL)
    }

    pub fn none() -> Self {
        Self {
            star_rating: false,
            comment: false,
            reviewer: false,
            create_time: false,
        }
    }

    pub fn only(fields: &[ReviewField]) -> Self {
        fields
            .iter()
            .fold(Self::none(), |selection, field| selection.with(*field, true))
    }

    pub fn with(mut self, field: ReviewField, selected: bool) -> Self {
        self.set(field, selected);
        self
    }

    pub fn is_selected(&self, field: ReviewField) -> bool {
        self.flags()[field.index()]
    }

    pub fn set(&mut self, field: ReviewField, selected: bool) {
        let slot = match field {
            ReviewField::StarRating => &mut self.star_rating,
            ReviewField::Comment => &mut self.comment,
            ReviewField::Reviewer => &mut self.reviewer,
            ReviewField::CreateTime => &mut self.create_time,
        };
        *slot = selected;
    }

    pub fn toggle(&mut self, field: ReviewField) {
        let current = self.is_selected(field);
        self.set(field, !current);
    }

    /// Selected fields in column order
    pub fn selected(&self) -> Vec<ReviewField> {
        ReviewField::ALL
            .into_iter()
            .filter(|field| self.is_selected(*field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.flags().iter().any(|flag| *flag)
    }

    /// Header labels for the selected columns
    pub fn headers(&self) -> Vec<String> {
        self.selected().iter().map(ReviewField::label).collect()
    }

    fn flags(&self) -> [bool; 4] {
        [self.star_rating, self.comment, self.reviewer, self.create_time]
    }
}

/// Parses a comma-separated field list, e.g. `comment,starRating`.
/// `all` selects every field.
impl FromStr for FieldSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }

        let fields = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<ReviewField>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::only(&fields))
    }
}
