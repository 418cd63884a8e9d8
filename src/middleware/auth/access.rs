//! Bearer access-token verification -> identity in request extensions.
//!
//! - `require`: any rejection is a 401; on success `AuthCtx` is inserted.
//! - `optional`: a missing header is fine (`MaybeAuthCtx(None)`), but a header that is
//!   present and fails verification is still a 401.
//!
//! Both layers go through the authenticator's `require` / `optional` wrappers, so
//! there is a single verification core.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::{AuthCtx, MaybeAuthCtx};
use crate::error::AppError;
use crate::services::auth::Rejection;
use crate::state::AppState;

/// Put every route of `router` behind required authentication.
///
/// ```ignore
/// let protected = middleware::auth::access::require(protected_routes(), state.clone());
/// ```
pub fn require(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: unmatched paths still 404 instead of 401
    router.route_layer(middleware::from_fn_with_state(state, require_middleware))
}

/// Put every route of `router` behind optional authentication.
pub fn optional(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, optional_middleware))
}

async fn require_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = bearer_credential(req.headers())
        .and_then(|credential| state.auth.require(credential))
        .map_err(|rejection| reject(&req, rejection))?;
    req.extensions_mut().insert(AuthCtx::from(claims));

    Ok(next.run(req).await)
}

async fn optional_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = bearer_credential(req.headers())
        .and_then(|credential| state.auth.optional(credential))
        .map_err(|rejection| reject(&req, rejection))?;
    req.extensions_mut()
        .insert(MaybeAuthCtx(claims.map(AuthCtx::from)));

    Ok(next.run(req).await)
}

fn reject(req: &Request<Body>, rejection: Rejection) -> AppError {
    // Kind only: never the credential itself.
    tracing::warn!(
        kind = rejection.as_str(),
        method = %req.method(),
        path = %req.uri().path(),
        "access token rejected"
    );
    AppError::from(rejection)
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// - no header -> `Ok(None)`
/// - non-ASCII value, other scheme, or empty token -> `Malformed`
pub fn bearer_credential(headers: &HeaderMap) -> Result<Option<&str>, Rejection> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| Rejection::Malformed)?;
    let (scheme, token) = value.trim().split_once(' ').ok_or(Rejection::Malformed)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(Rejection::Malformed);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(Rejection::Malformed);
    }

    Ok(Some(token))
}
