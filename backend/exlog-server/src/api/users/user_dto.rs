use exlog_core::{User, UserSummary};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<UserSummary> for UserDto {
    fn from(u: UserSummary) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
        }
    }
}

impl From<&User> for UserDto {
    fn from(u: &User) -> Self {
        u.summary().into()
    }
}
