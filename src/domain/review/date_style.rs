// ============================================================
// DATE STYLE
// ============================================================
// Calendar-date rendering for the `createTime` column

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timezone a timestamp is converted to before its date is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    /// Host timezone, like a browser's `toLocaleDateString`
    #[default]
    Local,
    Utc,
}

/// How `createTime` values are rendered as calendar dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateStyle {
    /// chrono strftime pattern (default: `%-m/%-d/%Y`, en-US short date)
    pub format: String,

    /// Zone used to decide which calendar day a timestamp falls on
    pub timezone: DateZone,
}

impl Default for DateStyle {
    fn default() -> Self {
        Self {
            format: "%-m/%-d/%Y".to_string(),
            timezone: DateZone::Local,
        }
    }
}

impl DateStyle {
    /// Default pattern evaluated in UTC; stable across hosts
    pub fn utc() -> Self {
        Self {
            timezone: DateZone::Utc,
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Render `raw` as a calendar date, or `None` when it does not parse
    pub fn render(&self, raw: &str) -> Option<String> {
        let timestamp = Timestamp::parse(raw)?;
        let date = match self.timezone {
            DateZone::Local => timestamp.date_in(&Local),
            DateZone::Utc => timestamp.date_in(&Utc),
        }?;

        let mut rendered = String::new();
        write!(rendered, "{}", date.format(&self.format)).ok()?;
        Some(rendered)
    }

    /// Validate the strftime pattern
    pub fn validate(&self) -> Result<(), String> {
        if self.format.trim().is_empty() {
            return Err("date format must not be empty".to_string());
        }
        if StrftimeItems::new(&self.format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("invalid date format '{}'", self.format));
        }
        Ok(())
    }
}

/// Date-time layouts tried after RFC 3339, most precise first
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Numeric offset layouts, `+05:00` and `+0500`
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

/// An ISO-8601 `createTime`, not yet pinned to a rendering zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Carries `Z` or a numeric offset
    Instant(DateTime<FixedOffset>),

    /// Date-time with no offset: wall-clock time in the rendering zone
    WallClock(NaiveDateTime),

    /// Bare `YYYY-MM-DD`: midnight UTC
    DateOnly(NaiveDate),
}

impl Timestamp {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(Timestamp::Instant(parsed));
        }

        if let Some(utc) = raw.strip_suffix(&['Z', 'z'][..]) {
            return parse_naive(utc)
                .map(|naive| Timestamp::Instant(naive.and_utc().fixed_offset()));
        }

        if let Some(parsed) = OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        {
            return Some(Timestamp::Instant(parsed));
        }

        if let Some(naive) = parse_naive(raw) {
            return Some(Timestamp::WallClock(naive));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(Timestamp::DateOnly)
    }

    /// Calendar day this timestamp falls on in `zone`
    pub fn date_in<Tz: TimeZone>(&self, zone: &Tz) -> Option<NaiveDate> {
        match self {
            Timestamp::Instant(instant) => Some(instant.with_timezone(zone).date_naive()),
            // A wall-clock time skipped by a DST gap still names its own day.
            Timestamp::WallClock(naive) => Some(
                zone.from_local_datetime(naive)
                    .earliest()
                    .map(|local| local.date_naive())
                    .unwrap_or_else(|| naive.date()),
            ),
            Timestamp::DateOnly(date) => date
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc().with_timezone(zone).date_naive()),
        }
    }
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
