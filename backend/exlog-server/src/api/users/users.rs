//! User REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateUserRequest, FormBody, UserDto};

use exlog_core::User;
use exlog_db::UserRepository;

use axum::{Json, extract::State};

/// GET /api/users
///
/// Every user as `{_id, username}`, in creation order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo
        .list()
        .await
        .map_err(|e| ApiError::store_failure("Could not list users", e))?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// POST /api/users
///
/// Create a user with an empty log
pub async fn create_user(
    State(state): State<AppState>,
    FormBody(req): FormBody<CreateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    let username = req
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::validation("username is required", "username"))?;

    let user = User::new(username.to_string());

    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user)
        .await
        .map_err(|e| ApiError::store_failure("Could not create user", e))?;

    state.metrics.user_created();
    log::info!("Created user {} ({})", user.username, user.id);

    Ok(Json(UserDto::from(&user)))
}
