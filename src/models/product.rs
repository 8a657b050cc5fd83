use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    // Minor currency units; there is no currency column.
    pub price: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}
