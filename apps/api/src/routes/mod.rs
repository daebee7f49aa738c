pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/documents/extract",
            post(handlers::handle_extract_document),
        )
        .route(
            "/api/v1/links/validate",
            post(handlers::handle_validate_link),
        )
        .with_state(state)
}
