pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Compatibility API
        .route(
            "/api/v1/compatibility",
            post(handlers::handle_compatibility),
        )
        .route("/api/v1/compatibility/rank", post(handlers::handle_rank))
        .route(
            "/api/v1/compatibility/config",
            get(handlers::handle_get_config),
        )
        .route("/api/v1/skills/parse", post(handlers::handle_parse_skills))
        .fallback(not_found)
        .with_state(state)
}
