/*
 * Responsibility
 * - v1 URL layout
 * - Decides which routes are public, optional-auth, or required-auth
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::auth::access;
use crate::state::AppState;

use crate::api::v1::handlers::{
    admin::admin_stats,
    leaderboard::{get_leaderboard, get_my_rank},
    profile::{get_my_data, get_profile, public, public_data},
    progress::{get_learning_history, save_progress},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/public", get(public))
        .route("/leaderboard", get(get_leaderboard));

    let optional_routes = access::optional(
        Router::new().route("/public-data", get(public_data)),
        state.clone(),
    );

    let protected_routes = access::require(
        Router::new()
            .route("/profile", get(get_profile))
            .route("/my-data", get(get_my_data))
            .route("/progress", post(save_progress))
            .route("/my-learning-history", get(get_learning_history))
            .route("/admin/stats", get(admin_stats))
            .route("/leaderboard/my-rank", get(get_my_rank)),
        state,
    );

    public_routes.merge(optional_routes).merge(protected_routes)
}
