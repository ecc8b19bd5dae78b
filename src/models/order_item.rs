// src/models/order_item.rs

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub item_id: i64,
  pub order_id: i64,
  pub product_id: i64,
  pub quantity: i64,
  /// Unit price x quantity, frozen at purchase time. Later product price
  /// changes do not touch committed line items.
  pub subtotal: i64,
}
