// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use signup_core::application::ports::{security::PasswordHasher, time::Clock};
use signup_core::application::services::ApplicationServices;
use signup_core::domain::user::UserRepository;
use signup_core::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const SIGNUP_URI: &str = "/api/auth/signup";

pub fn build_test_state(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let services = Arc::new(ApplicationServices::new(user_repo, password_hasher, clock));
    HttpState { services }
}

pub fn make_test_router(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
) -> axum::Router {
    let origins = vec!["http://localhost:3000".to_string()];
    build_router(build_test_state(user_repo, password_hasher), &origins)
}

pub async fn post_raw(app: &axum::Router, uri: &str, body: impl Into<Body>) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn post_json(app: &axum::Router, uri: &str, payload: &Value) -> axum::response::Response {
    post_raw(app, uri, payload.to_string()).await
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
