use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use error_location::ErrorLocation;

/// Naive date-time layouts accepted in addition to RFC 3339 and RFC 2822.
/// Values without an offset are read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Calendar layouts other than `YYYY-MM-DD`, including the display form produced by
/// `format_date`. Month names may be full or abbreviated.
const CALENDAR_DATE_FORMATS: [&str; 3] = ["%Y/%m/%d", "%a %b %d %Y", "%B %d, %Y"];

/// A date supplied by a client, resolved once at the request boundary.
///
/// `YYYY-MM-DD` text is kept as a calendar date so that formatting never shifts it
/// across a time-zone boundary. Anything else is a full timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseDate {
    DateOnly(NaiveDate),
    Instant(DateTime<Utc>),
}

impl ExerciseDate {
    pub fn now() -> Self {
        ExerciseDate::Instant(Utc::now())
    }

    /// Parse client text into a date.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDate` when the text matches none of the accepted
    /// calendar or date-time layouts, or names a day that does not exist.
    #[track_caller]
    pub fn parse(input: &str) -> CoreErrorResult<Self> {
        let value = input.trim();

        if is_date_only(value) {
            return NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(ExerciseDate::DateOnly)
                .map_err(|_| invalid_date(input));
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(ExerciseDate::Instant(parsed.with_timezone(&Utc)));
        }

        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(ExerciseDate::Instant(parsed.and_utc()));
            }
        }

        for format in CALENDAR_DATE_FORMATS {
            if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
                return Ok(ExerciseDate::DateOnly(parsed));
            }
        }

        DateTime::parse_from_rfc2822(value)
            .map(|parsed| ExerciseDate::Instant(parsed.with_timezone(&Utc)))
            .map_err(|_| invalid_date(input))
    }

    /// Parse optional client text, treating absent or blank input as "now".
    #[track_caller]
    pub fn parse_or_now(input: Option<&str>) -> CoreErrorResult<Self> {
        match input.map(str::trim) {
            Some(value) if !value.is_empty() => Self::parse(value),
            _ => Ok(Self::now()),
        }
    }

    /// The calendar date this value falls on (UTC for instants).
    pub fn calendar_date(&self) -> NaiveDate {
        match self {
            ExerciseDate::DateOnly(date) => *date,
            ExerciseDate::Instant(instant) => instant.date_naive(),
        }
    }

    /// The point in time stored for this value; date-only values sit at UTC midnight.
    pub fn to_instant(&self) -> DateTime<Utc> {
        match self {
            ExerciseDate::DateOnly(date) => date.and_time(NaiveTime::MIN).and_utc(),
            ExerciseDate::Instant(instant) => *instant,
        }
    }
}

impl From<DateTime<Utc>> for ExerciseDate {
    fn from(instant: DateTime<Utc>) -> Self {
        ExerciseDate::Instant(instant)
    }
}

/// Exactly `dddd-dd-dd`, nothing before or after.
fn is_date_only(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[track_caller]
fn invalid_date(input: &str) -> CoreError {
    CoreError::InvalidDate {
        value: input.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
