//! Exercise REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateExerciseRequest, ExerciseResponse, FormBody,
    parse_user_id,
};

use exlog_core::{ExerciseDate, ExerciseDuration, LogEntry, format_date};
use exlog_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/users/{user_id}/exercises
///
/// Append an entry to the user's log and bump their count. The response is built
/// from the submitted entry, not re-read from the store.
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    FormBody(req): FormBody<CreateExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    // 1. Build the candidate entry
    let description = req
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::validation("description is required", "description"))?
        .to_string();

    let duration = ExerciseDuration::parse(req.duration.as_deref().unwrap_or_default());

    let date = ExerciseDate::parse_or_now(req.date.as_deref())?;

    // 2. Load the owner
    let user_uuid = parse_user_id(&user_id)?;
    let repo = UserRepository::new(state.pool.clone());
    let mut user = repo
        .find_by_id(user_uuid)
        .await
        .map_err(ApiError::exercise_not_added)?
        .ok_or_else(|| ApiError::user_not_found(&user_id))?;

    // 3. Append and persist the whole user
    user.append(LogEntry::new(
        description.clone(),
        duration,
        date.to_instant(),
    ));

    let user = repo
        .save(user)
        .await
        .map_err(ApiError::exercise_not_added)?;

    state.metrics.exercise_appended();
    log::debug!("Appended exercise to user {} (count={})", user.id, user.count);

    Ok(Json(ExerciseResponse {
        id: user.id.to_string(),
        username: user.username,
        date: format_date(&date),
        duration,
        description,
    }))
}
