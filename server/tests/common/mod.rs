//! Shared helpers for the HTTP integration tests
//!
//! Each test gets its own in-memory database and the full production
//! middleware stack via `build_app`.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shop_server::core::{Config, ServerState, build_app};
use shop_server::db::DbService;
use tower::ServiceExt;

pub async fn test_app() -> Router {
    let db = DbService::memory().await.expect("failed to open memory db");
    let config = Config::with_overrides("/tmp/shop-server-test", 0);
    build_app(ServerState::with_db(config, db.db))
}

/// Fire one request at the app and return `(status, parsed body)`.
///
/// An empty body (e.g. 204) parses as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response was not JSON")
    };

    (status, value)
}

pub async fn signup(
    app: &Router,
    email: &str,
    username: &str,
    password: &str,
) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({"email": email, "username": username, "password": password})),
    )
    .await
}

pub async fn signin(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/auth/signin",
        None,
        Some(json!({"email": email, "password": password})),
    )
    .await
}

/// Register and sign in, returning a bearer token.
pub async fn register_and_signin(
    app: &Router,
    email: &str,
    username: &str,
    password: &str,
) -> String {
    let (status, _) = signup(app, email, username, password).await;
    assert_eq!(status, StatusCode::CREATED, "signup failed for {email}");

    let (status, body) = signin(app, email, password).await;
    assert_eq!(status, StatusCode::OK, "signin failed for {email}");

    body["token"]
        .as_str()
        .expect("signin response missing token")
        .to_string()
}
