use serde::Deserialize;

/// Form body for POST /api/users
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}
