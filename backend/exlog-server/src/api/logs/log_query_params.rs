use serde::Deserialize;

/// Query string for GET /api/users/{user_id}/logs
#[derive(Debug, Default, Deserialize)]
pub struct LogQueryParams {
    /// Earliest date kept (inclusive)
    pub from: Option<String>,
    /// Latest date kept (inclusive)
    pub to: Option<String>,
    /// Maximum entries returned; blank or zero means the configured default
    pub limit: Option<String>,
}
