/*
 * Responsibility
 * - POST /progress and GET /my-learning-history
 * - Callers may only write progress for themselves (user_id must equal the token subject)
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::progress::{LearningHistoryResponse, LearningProgressRequest, LearningProgressResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    services::progress::NewProgress,
    state::AppState,
};

pub async fn save_progress(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<LearningProgressRequest>,
) -> Result<(StatusCode, Json<LearningProgressResponse>), AppError> {
    req.validate().map_err(AppError::invalid_request)?;

    if req.user_id != ctx.user_id {
        tracing::warn!(user_id = %ctx.user_id, "attempt to save progress for another user");
        return Err(AppError::Forbidden("Cannot save progress for another user"));
    }

    let score = u8::try_from(req.score).map_err(|_| AppError::invalid_request("score out of range"))?;

    let record = state
        .progress
        .record(NewProgress {
            user_id: ctx.user_id,
            module: req.module.trim().to_string(),
            lesson: req.lesson.trim().to_string(),
            score,
            completed_at: req.completed_at.unwrap_or_else(chrono::Utc::now),
        })
        .await?;

    tracing::info!(user_id = %record.user_id, progress_id = %record.id, "progress saved");

    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn get_learning_history(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<LearningHistoryResponse>, AppError> {
    let records = state.progress.history_for(&ctx.user_id).await?;

    Ok(Json(LearningHistoryResponse {
        user_id: ctx.user_id,
        learning_sessions: records.into_iter().map(Into::into).collect(),
    }))
}
