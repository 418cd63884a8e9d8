//! CORS policy for the browser frontend.
//!
//! Policy:
//! - Configured origins are matched exactly and may send credentials.
//! - Production with an empty allowlist: no origin is allowed.
//! - Development with an empty allowlist: any origin, without credentials.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 10);

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter(|s| s.as_str() != "*")
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(PREFLIGHT_MAX_AGE);

    if !allowed.is_empty() {
        // Credentials are only ever combined with an explicit list, never with `Any`.
        return base
            .allow_origin(AllowOrigin::list(allowed))
            .allow_credentials(true);
    }

    if config.app_env.is_production() {
        base.allow_origin(AllowOrigin::predicate(|_: &HeaderValue, _| false))
    } else {
        base.allow_origin(Any)
    }
}
