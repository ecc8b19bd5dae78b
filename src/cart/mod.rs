// src/cart/mod.rs

//! Client-side shopping cart: an explicit value owned by the client session,
//! persisted through a pluggable [`CartStore`] adapter rather than read from
//! module scope.
//!
//! The cart is advisory only. Its price snapshots are for display; the order
//! placement service is the sole authority on price and stock at commit time,
//! which is why [`Cart::order_lines`] carries product ids and quantities but
//! never prices.

pub mod store;

pub use store::{CartStore, CartStoreError, InMemoryCartStore, JsonFileCartStore};

use crate::services::order_service::OrderLine;
use serde::{Deserialize, Serialize};

/// One cart line: a product plus display data snapshotted when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
  pub product_id: i64,
  pub product_name: String,
  /// Unit price in minor currency units, as seen when the entry was added.
  pub unit_price: i64,
  pub quantity: i64,
}

/// Ordered collection of cart entries. Insertion order is preserved so the
/// rendered cart is stable across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
  entries: Vec<CartEntry>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn entries(&self) -> &[CartEntry] {
    &self.entries
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Adds one unit of a product. If the product is already in the cart its
  /// quantity is incremented; the stored name/price snapshot is kept.
  pub fn add(&mut self, product_id: i64, product_name: &str, unit_price: i64) {
    if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
      entry.quantity += 1;
    } else {
      self.entries.push(CartEntry {
        product_id,
        product_name: product_name.to_string(),
        unit_price,
        quantity: 1,
      });
    }
  }

  /// Removes a product's line entirely. Removing an absent product is a no-op.
  pub fn remove(&mut self, product_id: i64) {
    self.entries.retain(|e| e.product_id != product_id);
  }

  /// Adjusts a product's quantity by `delta` (positive or negative). The line
  /// is removed when the quantity drops to zero or below.
  pub fn adjust_quantity(&mut self, product_id: i64, delta: i64) {
    if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
      entry.quantity += delta;
      if entry.quantity <= 0 {
        self.remove(product_id);
      }
    }
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  /// Running total: sum of unit price x quantity across entries, in minor
  /// currency units.
  pub fn total(&self) -> i64 {
    self.entries.iter().map(|e| e.unit_price * e.quantity).sum()
  }

  /// Total number of units across all lines (the cart badge count).
  pub fn item_count(&self) -> i64 {
    self.entries.iter().map(|e| e.quantity).sum()
  }

  /// The (product, quantity) pairs to submit for order placement. Price
  /// snapshots are deliberately not included.
  pub fn order_lines(&self) -> Vec<OrderLine> {
    self
      .entries
      .iter()
      .map(|e| OrderLine {
        product_id: e.product_id,
        quantity: e.quantity,
      })
      .collect()
  }
}
