//! Date-range, ordering and count selection over a user's exercise log

use crate::{CoreError, ExerciseDate, LogEntry, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Resolved log query: inclusive `[from, to]` window plus an entry cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub limit: usize,
}

impl LogQuery {
    /// Resolve raw client parameters.
    ///
    /// * `from` absent or blank - the Unix epoch
    /// * `to` absent or blank - `now`
    /// * `limit` absent or zero - `default_limit`
    ///
    /// # Errors
    /// Returns `CoreError::InvalidBound` naming `from` or `to` when that bound is not a
    /// recognizable date.
    #[track_caller]
    pub fn resolve(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<usize>,
        default_limit: usize,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<Self> {
        let from = match non_blank(from) {
            Some(value) => parse_bound("from", value)?,
            None => DateTime::<Utc>::UNIX_EPOCH,
        };

        let to = match non_blank(to) {
            Some(value) => parse_bound("to", value)?,
            None => now,
        };

        let limit = match limit {
            Some(limit) if limit > 0 => limit,
            _ => default_limit,
        };

        Ok(Self { from, to, limit })
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.from <= date && date <= self.to
    }

    /// Entries inside the window, most recent first, at most `limit` of them.
    /// Entries sharing a date keep their append order.
    pub fn select<'a>(&self, logs: &'a [LogEntry]) -> Vec<&'a LogEntry> {
        let mut selected: Vec<&LogEntry> = logs
            .iter()
            .filter(|entry| self.contains(entry.date))
            .collect();

        selected.sort_by(|a, b| b.date.cmp(&a.date));
        selected.truncate(self.limit);
        selected
    }
}

#[track_caller]
fn parse_bound(bound: &'static str, value: &str) -> CoreErrorResult<DateTime<Utc>> {
    match ExerciseDate::parse(value) {
        Ok(date) => Ok(date.to_instant()),
        Err(_) => Err(CoreError::InvalidBound {
            bound,
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
