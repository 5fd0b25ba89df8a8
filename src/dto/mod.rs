pub mod auth_dto;
pub mod employee_dto;

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

/// Lookup outcome returned by record-retrieval endpoints. Absence is a
/// normally-shaped 200 payload (`{"result": msg}`), not a transport error,
/// so callers distinguish by payload shape.
pub enum Lookup<T> {
    Found(T),
    NotFound(&'static str),
}

impl<T: Serialize> IntoResponse for Lookup<T> {
    fn into_response(self) -> Response {
        match self {
            Lookup::Found(value) => Json(value).into_response(),
            Lookup::NotFound(message) => Json(json!({ "result": message })).into_response(),
        }
    }
}
