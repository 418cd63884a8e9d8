/*
 * Responsibility
 * - GET /admin/stats: authenticated and flagged `is_admin` in user metadata
 */
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{api::v1::extractors::AuthCtxExtractor, error::AppError, state::AppState};

pub async fn admin_stats(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Value>, AppError> {
    if !ctx.is_admin() {
        return Err(AppError::Forbidden("Admin access required"));
    }

    let stats = state.progress.stats().await?;

    Ok(Json(json!({
        "message": "Admin statistics",
        "total_users": stats.total_users,
        "total_sessions": stats.total_sessions,
    })))
}
