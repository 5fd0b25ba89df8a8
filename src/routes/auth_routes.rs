use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::auth_dto::{AuthResponse, LoginPayload, RegisterPayload},
    error::{Error, Result},
    models::user::SessionUser,
    utils::jwt,
    AppState,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Response> {
    if payload.validate().is_err() {
        return Err(Error::Internal("Failed to register user".to_string()));
    }

    let user = match state.user_service.create(payload).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = ?e, "Error during registration");
            return Err(Error::Internal("Failed to register user".to_string()));
        }
    };

    Ok(respond_with_session(user.into()))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Response> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Ok(Json(json!({"result": "Invalid input"})).into_response());
    };
    if email.is_empty() || password.is_empty() {
        return Ok(Json(json!({"result": "Invalid input"})).into_response());
    }

    match state.user_service.authenticate(&email, &password).await? {
        Some(user) => Ok(respond_with_session(user.into())),
        None => Ok(Json(json!({"result": "No User Found"})).into_response()),
    }
}

/// Issues a session token embedding the sanitized user. A signing failure
/// is not fatal: the client gets a retry hint instead of an error status.
fn respond_with_session(user: SessionUser) -> Response {
    match jwt::sign_session(user.clone()) {
        Ok(auth) => Json(AuthResponse { user, auth }).into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to sign session token");
            Json(json!({"result": "Something went wrong, try again later"})).into_response()
        }
    }
}
