use exlog_core::{ExerciseDuration, LogEntry};

use chrono::{DateTime, TimeZone, Utc};

/// UTC midnight of the given day
pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// Creates a LogEntry with a valid duration
pub fn create_test_entry(description: &str, minutes: i64, date: DateTime<Utc>) -> LogEntry {
    LogEntry::new(
        description.to_string(),
        ExerciseDuration::Minutes(minutes),
        date,
    )
}
