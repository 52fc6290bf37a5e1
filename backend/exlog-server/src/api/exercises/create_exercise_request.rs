use serde::Deserialize;

/// Form body for POST /api/users/{user_id}/exercises
///
/// Every field is kept as raw text; parsing happens in the handler so that a bad
/// duration is stored rather than rejected.
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    /// Absent or empty means "now"
    #[serde(default)]
    pub date: Option<String>,
}
