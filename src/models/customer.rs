// src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
  pub customer_id: i64,
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub created_at: DateTime<Utc>,
}
