pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    exercises::{
        create_exercise_request::CreateExerciseRequest, exercise_response::ExerciseResponse,
        exercises::add_exercise,
    },
    extractors::{form_body::FormBody, query_params::QueryParams},
    logs::{
        log_entry_dto::LogEntryDto, log_query_params::LogQueryParams, log_response::LogResponse,
        logs::get_logs,
    },
    user_lookup::parse_user_id,
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        users::{create_user, list_users},
    },
};
pub use app_state::AppState;
pub use metrics::ApiMetrics;

pub use crate::routes::build_router;
