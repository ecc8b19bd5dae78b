// src/lib.rs

//! Storefront: a small e-commerce back office. REST API over PostgreSQL with a
//! transactional multi-item order placement flow, plus the client-side cart
//! model. Exposed as a library so the integration tests can drive the same
//! modules the server binary uses.

pub mod cart;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
