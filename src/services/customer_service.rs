// src/services/customer_service.rs

//! Customer writes and aggregates. These used to live in the store as opaque
//! stored procedures (`add_new_customer`, `get_customer_orders`,
//! `get_total_orders`, `get_customer_spent`); the logic is ported here so the
//! contract stays visible and testable.

use crate::errors::AppError;
use crate::models::Order;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::{info, instrument};

#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  pub address: Option<String>,
}

/// Per-customer aggregate figures for the back-office dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerStats {
  pub total_orders: i64,
  /// Lifetime spend in minor currency units; 0 for customers with no orders.
  pub total_spent: i64,
}

/// Creates a customer row and returns its generated id.
#[instrument(name = "customer_service::create_customer", skip(pool, new_customer), fields(email = %new_customer.email))]
pub async fn create_customer(pool: &PgPool, new_customer: &NewCustomer) -> Result<i64, AppError> {
  if new_customer.name.trim().is_empty() {
    return Err(AppError::Validation("name is required".to_string()));
  }
  if new_customer.email.trim().is_empty() {
    return Err(AppError::Validation("email is required".to_string()));
  }

  let (customer_id,): (i64,) =
    sqlx::query_as("INSERT INTO customers (name, email, phone, address) VALUES ($1, $2, $3, $4) RETURNING customer_id")
      .bind(&new_customer.name)
      .bind(&new_customer.email)
      .bind(&new_customer.phone)
      .bind(&new_customer.address)
      .fetch_one(pool)
      .await?;

  info!("Customer {} created.", customer_id);
  Ok(customer_id)
}

/// All orders belonging to one customer, newest first.
#[instrument(name = "customer_service::customer_orders", skip(pool))]
pub async fn customer_orders(pool: &PgPool, customer_id: i64) -> Result<Vec<Order>, AppError> {
  let orders: Vec<Order> = sqlx::query_as(
    "SELECT order_id, customer_id, order_date, total_amount, status FROM orders WHERE customer_id = $1 ORDER BY order_date DESC",
  )
  .bind(customer_id)
  .fetch_all(pool)
  .await?;

  Ok(orders)
}

/// Order count and lifetime spend for one customer.
#[instrument(name = "customer_service::customer_stats", skip(pool))]
pub async fn customer_stats(pool: &PgPool, customer_id: i64) -> Result<CustomerStats, AppError> {
  let stats: CustomerStats = sqlx::query_as(
    "SELECT COUNT(*) AS total_orders, COALESCE(SUM(total_amount), 0)::BIGINT AS total_spent FROM orders WHERE customer_id = $1",
  )
  .bind(customer_id)
  .fetch_one(pool)
  .await?;

  Ok(stats)
}
