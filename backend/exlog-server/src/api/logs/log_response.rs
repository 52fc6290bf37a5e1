use crate::LogEntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Stored count, independent of the query window
    pub count: i64,
    pub log: Vec<LogEntryDto>,
}
