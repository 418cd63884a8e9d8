/*
 * Responsibility
 * - GET / and GET /health (liveness, outside any auth middleware)
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Lesson API is running!",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"status": "healthy", "environment": state.app_env.as_str()})),
    )
}
