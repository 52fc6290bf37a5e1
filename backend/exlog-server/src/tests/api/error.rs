use crate::ApiError;

use exlog_core::{ExerciseDate, LogQuery};
use exlog_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_user_not_found_returns_200_with_error_body() {
    let (status, json) = body_json(ApiError::user_not_found("abc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_exercise_not_added_returns_200_without_store_details() {
    let error = ApiError::ExerciseNotAdded {
        message: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "error": "Could not add exercise" }));
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("username is required", "username")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "username is required");
    assert_eq!(json["field"], "username");
}

#[tokio::test]
async fn test_internal_error_returns_500_with_flat_body() {
    let error = ApiError::Internal {
        message: "Could not list users".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Could not list users" }));
}

#[test]
fn test_invalid_date_converts_to_validation_on_date_field() {
    let core_error = ExerciseDate::parse("not-a-date").unwrap_err();

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Invalid date 'not-a-date'");
            assert_eq!(field.as_deref(), Some("date"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_invalid_bound_converts_to_validation_on_bound_field() {
    let core_error =
        LogQuery::resolve(None, Some("later"), None, 500, chrono::Utc::now()).unwrap_err();

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Invalid date 'later'");
            assert_eq!(field.as_deref(), Some("to"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_request_returns_400_without_field() {
    let (status, json) = body_json(ApiError::malformed_request("Failed to deserialize form")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "Failed to deserialize form" }));
}

#[test]
fn test_exercise_not_added_wraps_store_failure() {
    let api_error = ApiError::exercise_not_added(DbError::from(sqlx::Error::PoolClosed));

    assert!(matches!(api_error, ApiError::ExerciseNotAdded { .. }));
}
