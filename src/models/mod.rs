// src/models/mod.rs

//! Contains data structures representing database entities.

// Declare child modules for each model
pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;

// Re-export the model structs for convenient access
pub use customer::Customer;
pub use order::{Order, OrderStatus};
pub use order_item::OrderItem;
pub use product::Product;
