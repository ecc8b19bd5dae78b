// src/cart/store.rs

//! Persistence adapters for the client cart. The browser original kept the
//! cart as a JSON string in local storage; [`JsonFileCartStore`] is the
//! equivalent for a native client session, and [`InMemoryCartStore`] backs
//! tests and throwaway sessions.

use super::Cart;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartStoreError {
  #[error("Cart storage I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Cart snapshot is not valid JSON: {0}")]
  Serde(#[from] serde_json::Error),
}

/// Seam between the cart value and wherever it is persisted.
pub trait CartStore {
  /// Loads the persisted cart; a store with no snapshot yields an empty cart.
  fn load(&self) -> Result<Cart, CartStoreError>;

  /// Replaces the persisted snapshot with `cart`.
  fn save(&self, cart: &Cart) -> Result<(), CartStoreError>;
}

/// Cart snapshot as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
  path: PathBuf,
}

impl JsonFileCartStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl CartStore for JsonFileCartStore {
  fn load(&self) -> Result<Cart, CartStoreError> {
    match std::fs::read_to_string(&self.path) {
      Ok(raw) => Ok(serde_json::from_str(&raw)?),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Cart::new()),
      Err(e) => Err(e.into()),
    }
  }

  fn save(&self, cart: &Cart) -> Result<(), CartStoreError> {
    let raw = serde_json::to_string(cart)?;
    std::fs::write(&self.path, raw)?;
    Ok(())
  }
}

/// Keeps the snapshot in memory; used by tests.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
  snapshot: Mutex<Cart>,
}

impl InMemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl CartStore for InMemoryCartStore {
  fn load(&self) -> Result<Cart, CartStoreError> {
    Ok(self.snapshot.lock().expect("cart store mutex poisoned").clone())
  }

  fn save(&self, cart: &Cart) -> Result<(), CartStoreError> {
    *self.snapshot.lock().expect("cart store mutex poisoned") = cart.clone();
    Ok(())
  }
}
