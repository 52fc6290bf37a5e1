//! Exercise log REST API handlers

use crate::{
    ApiError, ApiResult, AppState, LogEntryDto, LogQueryParams, LogResponse, QueryParams,
    parse_user_id,
};

use exlog_core::LogQuery;
use exlog_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

/// GET /api/users/{user_id}/logs (also /log)
///
/// The user's log filtered to `[from, to]`, most recent first, capped at `limit`
pub async fn get_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    QueryParams(params): QueryParams<LogQueryParams>,
) -> ApiResult<Json<LogResponse>> {
    // 1. Resolve the query window and cap
    let limit = parse_limit(params.limit.as_deref())?;
    let query = LogQuery::resolve(
        params.from.as_deref(),
        params.to.as_deref(),
        limit,
        state.api_config.default_log_limit,
        Utc::now(),
    )?;

    // 2. Load the owner
    let user_uuid = parse_user_id(&user_id)?;
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_uuid)
        .await
        .map_err(|e| ApiError::store_failure("Could not retrieve exercise log", e))?
        .ok_or_else(|| ApiError::user_not_found(&user_id))?;

    // 3. Select and format
    let log: Vec<LogEntryDto> = query
        .select(&user.logs)
        .into_iter()
        .map(LogEntryDto::from)
        .collect();

    state.metrics.log_queried(log.len());

    Ok(Json(LogResponse {
        id: user.id.to_string(),
        username: user.username,
        count: user.count,
        log,
    }))
}

#[track_caller]
fn parse_limit(limit: Option<&str>) -> ApiResult<Option<usize>> {
    match limit.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<usize>().map(Some).map_err(|_| {
            ApiError::validation(format!("Invalid limit '{}'", value), "limit")
        }),
    }
}
