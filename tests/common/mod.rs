#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use lesson_api::{app, config::Config};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

pub fn config() -> Config {
    config_with(&[])
}

/// Test configuration with extra variables layered on top.
pub fn config_with(extra: &[(&'static str, &'static str)]) -> Config {
    let mut vars: HashMap<&str, &str> = HashMap::from([
        ("AUTH_JWT_SECRET", SECRET),
        ("APP_ENV", "development"),
    ]);
    vars.extend(extra.iter().copied());
    Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap()
}

pub fn test_app() -> Router {
    app_for(&config())
}

pub fn app_for(config: &Config) -> Router {
    let state = app::build_state(config).unwrap();
    app::build_router(state, config)
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn claims(sub: &str, exp: i64) -> Value {
    json!({
        "sub": sub,
        "exp": exp,
        "iat": now(),
        "aud": "authenticated",
        "email": format!("{sub}@example.com"),
        "role": "authenticated",
        "user_metadata": {},
    })
}

pub fn sign(payload: &Value, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Valid for one hour.
pub fn token_for(sub: &str) -> String {
    sign(&claims(sub, now() + 3600), SECRET)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
