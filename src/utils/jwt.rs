use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::get_config;
use crate::error::Result;
use crate::models::user::SessionUser;

/// Sessions expire 4 hours after issuance. There is no revocation before
/// natural expiry.
const SESSION_TTL_SECS: i64 = 4 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: SessionUser,
    pub iat: usize,
    pub exp: usize,
}

pub fn sign_session(user: SessionUser) -> Result<String> {
    sign_with_ttl(user, SESSION_TTL_SECS)
}

fn sign_with_ttl(user: SessionUser, ttl_secs: i64) -> Result<String> {
    let config = get_config();
    let now = Utc::now().timestamp();
    let claims = Claims {
        user,
        iat: now as usize,
        exp: (now + ttl_secs) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify_session(token: &str) -> Result<Claims> {
    let config = get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
