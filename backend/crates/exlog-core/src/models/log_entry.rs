use crate::ExerciseDuration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One exercise session, owned by the user whose log holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: ExerciseDuration,
    pub date: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(description: String, duration: ExerciseDuration, date: DateTime<Utc>) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }
}
