use crate::{AppState, add_exercise, create_user, get_logs, health, list_users};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let router = Router::new()
        // User endpoints
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{user_id}/exercises", post(add_exercise))
        .route("/api/users/{user_id}/logs", get(get_logs))
        .route("/api/users/{user_id}/log", get(get_logs))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state);

    // Static front page and assets for anything no route matches
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
