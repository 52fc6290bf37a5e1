use crate::LogEntry;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,

    /// Number of entries ever appended. Kept in step with `logs.len()`.
    pub count: i64,

    /// Entries in append order
    pub logs: Vec<LogEntry>,
}

impl User {
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            count: 0,
            logs: Vec::new(),
        }
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.logs.push(entry);
        self.count += 1;
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
}
