pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::insights::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/insights", post(handlers::handle_extract))
        .route("/api/v1/insights/upload", post(handlers::handle_upload))
        .layer(body_limit)
        .with_state(state)
}
