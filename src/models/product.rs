// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub product_id: i64,
  pub product_name: String,
  pub category: String,
  /// Unit price in minor currency units.
  pub price: i64,
  pub stock: i64,
  pub description: Option<String>, // Description can be optional
  pub created_at: DateTime<Utc>,
}
