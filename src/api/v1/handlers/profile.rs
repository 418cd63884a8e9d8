/*
 * Responsibility
 * - Endpoints answering from the verified identity alone (no store access)
 * - /public (no auth), /public-data (optional auth), /profile and /my-data (required auth)
 */
use axum::Json;
use serde_json::{Value, json};

use crate::api::v1::{
    dto::profile::{MyDataResponse, PublicDataResponse, UserProfileResponse},
    extractors::{AuthCtxExtractor, MaybeAuthCtxExtractor},
};

pub async fn public() -> Json<Value> {
    Json(json!({"message": "This is a public endpoint - no authentication required"}))
}

pub async fn public_data(MaybeAuthCtxExtractor(ctx): MaybeAuthCtxExtractor) -> Json<PublicDataResponse> {
    let res = match ctx {
        Some(ctx) => PublicDataResponse {
            message: "Hello authenticated user!".to_string(),
            user_id: Some(ctx.user_id),
            is_authenticated: true,
        },
        None => PublicDataResponse {
            message: "Hello guest user!".to_string(),
            user_id: None,
            is_authenticated: false,
        },
    };

    Json(res)
}

pub async fn get_profile(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<UserProfileResponse> {
    Json(UserProfileResponse {
        full_name: ctx.metadata_str("full_name").unwrap_or_default().to_string(),
        learning_goals: ctx
            .metadata_str("learning_goals")
            .unwrap_or_default()
            .to_string(),
        email: ctx.email.clone().unwrap_or_default(),
        created_at: ctx.issued_at,
        id: ctx.user_id,
    })
}

pub async fn get_my_data(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MyDataResponse> {
    Json(MyDataResponse {
        message: format!("Hello {}!", ctx.display_name()),
        user_id: ctx.user_id,
        is_authenticated: true,
        user_metadata: ctx.user_metadata,
    })
}
