// src/models/order.rs

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType}; // Renamed Type to SqlxType to avoid conflict
use std::str::FromStr;

// Maps onto the `order_status_enum` Postgres type in schema.sql.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "order_status_enum", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
}

impl FromStr for OrderStatus {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(OrderStatus::Pending),
      "processing" => Ok(OrderStatus::Processing),
      "shipped" => Ok(OrderStatus::Shipped),
      "delivered" => Ok(OrderStatus::Delivered),
      "cancelled" => Ok(OrderStatus::Cancelled),
      other => Err(AppError::Validation(format!("Unknown order status '{}'", other))),
    }
  }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub order_id: i64,
  pub customer_id: i64,
  pub order_date: DateTime<Utc>,
  /// Sum of the order's line subtotals, in minor currency units.
  /// Inserted as 0 and finalized inside the placement transaction.
  pub total_amount: i64,
  pub status: OrderStatus,
}
