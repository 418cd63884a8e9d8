/*
 * Responsibility
 * - GET /leaderboard (public, paged) and GET /leaderboard/my-rank (required auth)
 */
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    api::v1::{
        dto::leaderboard::{LeaderboardPageResponse, LeaderboardQuery},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    services::leaderboard::{self, LeaderboardEntry},
    state::AppState,
};

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardPageResponse>, AppError> {
    query.validate().map_err(AppError::invalid_request)?;

    let ranked = leaderboard::rank(state.progress.totals().await?);
    let items = leaderboard::page(&ranked, query.page, query.page_size).to_vec();

    Ok(Json(LeaderboardPageResponse {
        items,
        page: query.page,
        page_size: query.page_size,
    }))
}

pub async fn get_my_rank(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<LeaderboardEntry>, AppError> {
    let ranked = leaderboard::rank(state.progress.totals().await?);

    leaderboard::position_of(&ranked, &ctx.user_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::not_found("user"))
}
