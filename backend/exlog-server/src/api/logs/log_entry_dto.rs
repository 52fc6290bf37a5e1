use exlog_core::{ExerciseDate, ExerciseDuration, LogEntry, format_date};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogEntryDto {
    pub description: String,
    pub duration: ExerciseDuration,
    pub date: String,
}

impl From<&LogEntry> for LogEntryDto {
    fn from(e: &LogEntry) -> Self {
        Self {
            description: e.description.clone(),
            duration: e.duration,
            date: format_date(&ExerciseDate::from(e.date)),
        }
    }
}
