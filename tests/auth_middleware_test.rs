use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    middleware::from_fn,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use contractor_backend::{
    middleware::auth::require_bearer_auth, models::user::SessionUser, utils::jwt,
};

fn init_test_config() {
    std::env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    std::env::set_var("DATABASE_URL", "postgres://localhost/contractor_test");
    std::env::set_var("JWT_SECRET", "middleware_test_secret");
    let _ = contractor_backend::config::init_config();
}

async fn protected_probe() -> Json<JsonValue> {
    Json(json!({"ok": true}))
}

/// The middleware only needs the signing secret, so the probe route has no
/// state and no store behind it.
fn protected_app() -> Router {
    Router::new()
        .route("/employee", get(protected_probe))
        .layer(from_fn(require_bearer_auth))
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_header_is_rejected_without_reaching_handler() {
    init_test_config();
    let req = Request::builder()
        .method("GET")
        .uri("/employee")
        .body(Body::empty())
        .unwrap();
    let resp = protected_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["result"], "Please add token to the header");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    init_test_config();
    let req = Request::builder()
        .method("GET")
        .uri("/employee")
        .header("authorization", "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();
    let resp = protected_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["result"], "Please provide a valid token");
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    init_test_config();
    let token = jwt::sign_session(sample_user()).expect("sign");
    let req = Request::builder()
        .method("GET")
        .uri("/employee")
        .header("authorization", format!("Token {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = protected_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_invokes_the_handler() {
    init_test_config();
    let token = jwt::sign_session(sample_user()).expect("sign");
    let req = Request::builder()
        .method("GET")
        .uri("/employee")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = protected_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["ok"], true);
}

fn sample_user() -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        name: "Gate Tester".into(),
        email: "gate@example.com".into(),
        created_at: None,
    }
}
