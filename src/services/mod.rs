// src/services/mod.rs

//! Business logic invoked by the HTTP handlers. The order placement service is
//! the only part with real invariants; everything else is parameterized reads.

pub mod customer_service;
pub mod order_service;
