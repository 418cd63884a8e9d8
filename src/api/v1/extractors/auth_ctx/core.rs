use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::{AuthCtx, MaybeAuthCtx};

/// Extractor handing `AuthCtx` to handlers on required-auth routes.
/// Relies on the access middleware having inserted it into request extensions;
/// returns 401 when it is absent (route not behind the middleware).
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(AppError::Unauthorized)
    }
}

/// Extractor for optional-auth routes.
/// Without the optional middleware in front there is no identity, so the caller is anonymous.
pub struct MaybeAuthCtxExtractor(pub Option<AuthCtx>);

impl FromRequestParts<AppState> for MaybeAuthCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<MaybeAuthCtx>()
            .and_then(|maybe| maybe.0.clone());

        Ok(MaybeAuthCtxExtractor(ctx))
    }
}
