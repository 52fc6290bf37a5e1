use exlog_core::ExerciseDuration;

use serde::Serialize;

/// The appended entry, normalized, alongside its owner
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub date: String,
    pub duration: ExerciseDuration,
    pub description: String,
}
