use crate::dto::auth_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto;
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a new account with a salted one-way hash of the password.
    pub async fn create(&self, payload: RegisterPayload) -> Result<User> {
        let password_hash = crypto::hash_password(&payload.password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, password_hash, created_at",
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Looks up by email and verifies the submitted password against the
    /// stored hash. A missing account and a wrong password are the same
    /// no-match outcome.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let verified = crypto::verify_password(password, &user.password_hash)
            .map_err(|e| Error::Internal(format!("Password verification failed: {}", e)))?;

        Ok(verified.then_some(user))
    }
}
