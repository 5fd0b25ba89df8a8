use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::utils::jwt;

/// Gates protected handlers behind `Authorization: Bearer <token>`.
///
/// A missing header short-circuits with 403; a header that does not carry a
/// verifiable token short-circuits with 401. On success the verified claims
/// are inserted into request extensions so handlers can read the caller's
/// identity without re-deriving it from the body.
pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"result": "Please add token to the header"})),
        )
            .into_response();
    };

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default();

    match jwt::verify_session(token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"result": "Please provide a valid token"})),
        )
            .into_response(),
    }
}
