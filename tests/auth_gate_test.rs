mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{
    SECRET, app_for, claims, config_with, get, now, send, sign, test_app, token_for,
};

#[tokio::test]
async fn valid_token_reaches_the_handler() {
    let app = test_app();

    let res = send(&app, get("/api/v1/my-data", Some(&token_for("user_42")))).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user_id"], "user_42");
    assert_eq!(res.body["is_authenticated"], true);
    assert_eq!(res.body["message"], "Hello user_42@example.com!");
}

#[tokio::test]
async fn missing_header_on_required_route_is_401() {
    let app = test_app();

    let res = send(&app, get("/api/v1/profile", None)).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    assert_eq!(res.body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn every_rejection_looks_the_same_to_the_client() {
    let app = test_app();

    let foreign = sign(&claims("user_42", now() + 3600), "some-other-secret");
    let expired = sign(&claims("user_42", now() - 1), SECRET);

    let missing = send(&app, get("/api/v1/profile", None)).await;
    let malformed = send(&app, get("/api/v1/profile", Some("not-a-jwt"))).await;
    let bad_sig = send(&app, get("/api/v1/profile", Some(&foreign))).await;
    let stale = send(&app, get("/api/v1/profile", Some(&expired))).await;

    for res in [&missing, &malformed, &bad_sig, &stale] {
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(res.body, missing.body);
    }
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let app = test_app();
    let req = Request::builder()
        .uri("/api/v1/profile")
        .header(header::AUTHORIZATION, format!("Token {}", token_for("user_42")))
        .body(Body::empty())
        .unwrap();

    let res = send(&app, req).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn optional_route_serves_guests() {
    let app = test_app();

    let res = send(&app, get("/api/v1/public-data", None)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["is_authenticated"], false);
    assert!(res.body.get("user_id").is_none());
}

#[tokio::test]
async fn optional_route_recognises_valid_tokens() {
    let app = test_app();

    let res = send(&app, get("/api/v1/public-data", Some(&token_for("user_42")))).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["is_authenticated"], true);
    assert_eq!(res.body["user_id"], "user_42");
}

#[tokio::test]
async fn optional_route_rejects_invalid_tokens() {
    let app = test_app();
    let expired = sign(&claims("user_42", now() - 1), SECRET);

    let res = send(&app, get("/api/v1/public-data", Some(&expired))).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn public_routes_ignore_credentials() {
    let app = test_app();

    for uri in ["/", "/health", "/api/v1/public"] {
        let res = send(&app, get(uri, Some("garbage"))).await;
        assert_eq!(res.status, StatusCode::OK, "{uri}");
    }

    let health = send(&app, get("/health", None)).await;
    assert_eq!(health.body["status"], "healthy");
    assert_eq!(health.body["environment"], "development");
}

#[tokio::test]
async fn unversioned_api_paths_are_served() {
    let app = test_app();

    let public = send(&app, get("/api/public", None)).await;
    assert_eq!(public.status, StatusCode::OK);

    let profile = send(&app, get("/api/profile", Some(&token_for("user_42")))).await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["id"], "user_42");

    let anonymous = send(&app, get("/api/profile", None)).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn configured_issuer_cannot_be_skipped() {
    let app = app_for(&config_with(&[(
        "AUTH_ISSUER",
        "https://issuer.example/auth/v1",
    )]));

    let without_iss = sign(&claims("user_42", now() + 3600), SECRET);
    let res = send(&app, get("/api/v1/my-data", Some(&without_iss))).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let mut payload = claims("user_42", now() + 3600);
    payload["iss"] = serde_json::json!("https://issuer.example/auth/v1");
    let res = send(&app, get("/api/v1/my-data", Some(&sign(&payload, SECRET)))).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_protected_path_is_404_not_401() {
    let app = test_app();

    let res = send(&app, get("/api/v1/does-not-exist", None)).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_reads_user_metadata() {
    let app = test_app();
    let mut payload = claims("user_7", now() + 3600);
    payload["user_metadata"] = serde_json::json!({
        "full_name": "Ada Signer",
        "learning_goals": "Fingerspelling",
    });
    let token = sign(&payload, SECRET);

    let res = send(&app, get("/api/v1/profile", Some(&token))).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["id"], "user_7");
    assert_eq!(res.body["email"], "user_7@example.com");
    assert_eq!(res.body["full_name"], "Ada Signer");
    assert_eq!(res.body["learning_goals"], "Fingerspelling");
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = test_app();

    let res = send(&app, get("/health", None)).await;

    assert!(res.headers.contains_key("x-request-id"));
    assert_eq!(res.headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(res.headers.get("cache-control").unwrap(), "no-store");
}

#[tokio::test]
async fn preflight_from_configured_origin_is_allowed() {
    let app = test_app();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/profile")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();

    let res = send(&app, req).await;

    assert_eq!(
        res.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        res.headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
