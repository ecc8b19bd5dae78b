// src/services/order_service.rs

//! Multi-item order placement: the single unit of work that validates stock,
//! writes the order header and line items, decrements inventory and finalizes
//! the total, all inside one database transaction.

use crate::errors::AppError;
use crate::models::OrderStatus;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

/// One requested (product, quantity) pair within an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLine {
  pub product_id: i64,
  pub quantity: i64,
}

/// Checks the request shape before any transactional work begins.
///
/// Failures here are `AppError::Validation` and never touch the store.
pub fn validate_order_request(customer_id: i64, lines: &[OrderLine]) -> Result<(), AppError> {
  if customer_id <= 0 {
    return Err(AppError::Validation("customer_id is required".to_string()));
  }
  if lines.is_empty() {
    return Err(AppError::Validation("order must contain at least one item".to_string()));
  }
  for line in lines {
    if line.product_id <= 0 {
      return Err(AppError::Validation("product_id is required for every item".to_string()));
    }
    if line.quantity <= 0 {
      return Err(AppError::Validation(format!(
        "quantity must be positive for product {}",
        line.product_id
      )));
    }
  }
  Ok(())
}

/// Places an order for `customer_id` covering every line in `lines`.
///
/// The whole placement runs in one transaction: the order header is inserted
/// with a placeholder total, each line is admitted under a `FOR UPDATE` row
/// lock on its product (so concurrent placements for the same product cannot
/// both observe sufficient stock), and the real total is written before the
/// commit. Any failure propagates out and the dropped transaction rolls back
/// the header, items and stock decrements as a unit.
///
/// Returns the new order id.
#[instrument(name = "order_service::place_order", skip(pool, lines), fields(customer_id = customer_id, line_count = lines.len()))]
pub async fn place_order(pool: &PgPool, customer_id: i64, lines: &[OrderLine]) -> Result<i64, AppError> {
  validate_order_request(customer_id, lines)?;

  let mut tx = pool.begin().await?;

  // Surface an unknown customer as a business-rule failure instead of letting
  // the FK constraint turn it into a 500.
  let customer: Option<(i64,)> = sqlx::query_as("SELECT customer_id FROM customers WHERE customer_id = $1")
    .bind(customer_id)
    .fetch_optional(&mut *tx)
    .await?;
  if customer.is_none() {
    warn!("Order rejected: customer {} does not exist.", customer_id);
    return Err(AppError::UnknownCustomer { customer_id });
  }

  let (order_id,): (i64,) = sqlx::query_as("INSERT INTO orders (customer_id, total_amount) VALUES ($1, 0) RETURNING order_id")
    .bind(customer_id)
    .fetch_one(&mut *tx)
    .await?;

  let mut total_amount: i64 = 0;
  for line in lines {
    // Row lock: serializes the check-then-decrement window per product across
    // concurrent order transactions.
    let product: Option<(i64, i64)> = sqlx::query_as("SELECT price, stock FROM products WHERE product_id = $1 FOR UPDATE")
      .bind(line.product_id)
      .fetch_optional(&mut *tx)
      .await?;

    let (price, stock) = match product {
      Some(row) => row,
      None => {
        warn!("Order {} rejected: product {} does not exist.", order_id, line.product_id);
        return Err(AppError::UnknownProduct {
          product_id: line.product_id,
        });
      }
    };

    if stock < line.quantity {
      warn!(
        "Order {} rejected: product {} has stock {}, requested {}.",
        order_id, line.product_id, stock, line.quantity
      );
      return Err(AppError::InsufficientStock {
        product_id: line.product_id,
        requested: line.quantity,
        available: stock,
      });
    }

    let subtotal = price * line.quantity;

    sqlx::query("INSERT INTO order_items (order_id, product_id, quantity, subtotal) VALUES ($1, $2, $3, $4)")
      .bind(order_id)
      .bind(line.product_id)
      .bind(line.quantity)
      .bind(subtotal)
      .execute(&mut *tx)
      .await?;

    sqlx::query("UPDATE products SET stock = stock - $1 WHERE product_id = $2")
      .bind(line.quantity)
      .bind(line.product_id)
      .execute(&mut *tx)
      .await?;

    total_amount += subtotal;
  }

  // Finalize the total before the commit so the committed row never shows the
  // placeholder value.
  sqlx::query("UPDATE orders SET total_amount = $1 WHERE order_id = $2")
    .bind(total_amount)
    .bind(order_id)
    .execute(&mut *tx)
    .await?;

  tx.commit().await?;

  info!(
    "Order {} placed for customer {}: {} line(s), total {}.",
    order_id,
    customer_id,
    lines.len(),
    total_amount
  );
  Ok(order_id)
}

/// Updates the lifecycle status of an existing order.
#[instrument(name = "order_service::update_status", skip(pool))]
pub async fn update_order_status(pool: &PgPool, order_id: i64, status: OrderStatus) -> Result<(), AppError> {
  let result = sqlx::query("UPDATE orders SET status = $1 WHERE order_id = $2")
    .bind(status)
    .bind(order_id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(AppError::NotFound(format!("Order with ID {} not found.", order_id)));
  }

  info!("Order {} status updated to {:?}.", order_id, status);
  Ok(())
}
