use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::SessionUser;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Both fields optional so an incomplete body reaches the handler and gets
/// the "Invalid input" sentinel instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: SessionUser,
    pub auth: String,
}
