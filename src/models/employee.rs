use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A contractor/vendor engagement. `id` is the store-assigned identifier;
/// `code` is the caller-supplied external code.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub code: String,
    pub contractor_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    pub cost: Decimal,
    pub status: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
