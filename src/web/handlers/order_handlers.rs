// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::OrderStatus;
use crate::services::order_service::{self, OrderLine};
use crate::state::AppState;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct PlaceOrderRequestPayload {
  pub customer_id: i64,
  pub product_id: i64,
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
pub struct PlaceMultiOrderRequestPayload {
  pub customer_id: i64,
  pub items: Vec<OrderLine>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateStatusRequestPayload {
  pub status: String,
}

// --- Joined row shapes for the read endpoints ---

#[derive(Debug, Serialize, FromRow)]
pub struct OrderWithCustomer {
  pub order_id: i64,
  pub customer_id: i64,
  pub customer_name: String,
  pub order_date: DateTime<Utc>,
  pub total_amount: i64,
  pub status: OrderStatus,
}

#[derive(Debug, Serialize, FromRow)]
pub struct OrderHeaderDetail {
  pub order_id: i64,
  pub customer_id: i64,
  pub customer_name: String,
  pub email: String,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub order_date: DateTime<Utc>,
  pub total_amount: i64,
  pub status: OrderStatus,
}

#[derive(Debug, Serialize, FromRow)]
pub struct OrderItemDetail {
  pub item_id: i64,
  pub product_id: i64,
  pub product_name: String,
  /// Current catalog price; the frozen line price is `subtotal / quantity`.
  pub price: i64,
  pub quantity: i64,
  pub subtotal: i64,
}

#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
  #[serde(flatten)]
  pub order: OrderHeaderDetail,
  pub items: Vec<OrderItemDetail>,
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders: Vec<OrderWithCustomer> = sqlx::query_as(
    "SELECT o.order_id, o.customer_id, c.name AS customer_name, o.order_date, o.total_amount, o.status \
     FROM orders o \
     JOIN customers c ON o.customer_id = c.customer_id \
     ORDER BY o.order_date DESC",
  )
  .fetch_all(&app_state.db_pool)
  .await?;

  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  let order_opt: Option<OrderHeaderDetail> = sqlx::query_as(
    "SELECT o.order_id, o.customer_id, c.name AS customer_name, c.email, c.phone, c.address, \
            o.order_date, o.total_amount, o.status \
     FROM orders o \
     JOIN customers c ON o.customer_id = c.customer_id \
     WHERE o.order_id = $1",
  )
  .bind(order_id)
  .fetch_optional(&app_state.db_pool)
  .await?;

  let order = match order_opt {
    Some(order) => order,
    None => {
      warn!("Order with ID {} not found.", order_id);
      return Err(AppError::NotFound(format!("Order with ID {} not found.", order_id)));
    }
  };

  let items: Vec<OrderItemDetail> = sqlx::query_as(
    "SELECT oi.item_id, oi.product_id, p.product_name, p.price, oi.quantity, oi.subtotal \
     FROM order_items oi \
     JOIN products p ON oi.product_id = p.product_id \
     WHERE oi.order_id = $1",
  )
  .bind(order_id)
  .fetch_all(&app_state.db_pool)
  .await?;

  Ok(HttpResponse::Ok().json(OrderDetailResponse { order, items }))
}

#[instrument(
    name = "handler::place_order",
    skip(app_state, req_payload),
    fields(customer_id = %req_payload.customer_id, product_id = %req_payload.product_id)
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<PlaceOrderRequestPayload>,
) -> Result<HttpResponse, AppError> {
  // A single-item order is the multi-item flow with one line.
  let lines = [OrderLine {
    product_id: req_payload.product_id,
    quantity: req_payload.quantity,
  }];
  let order_id = order_service::place_order(&app_state.db_pool, req_payload.customer_id, &lines).await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully",
      "orderId": order_id
  })))
}

#[instrument(
    name = "handler::place_multi_order",
    skip(app_state, req_payload),
    fields(customer_id = %req_payload.customer_id, line_count = req_payload.items.len())
)]
pub async fn place_multi_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<PlaceMultiOrderRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!(
    "Multi-item order attempt for customer {} with {} line(s).",
    req_payload.customer_id,
    req_payload.items.len()
  );

  let order_id = order_service::place_order(&app_state.db_pool, req_payload.customer_id, &req_payload.items).await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully",
      "orderId": order_id
  })))
}

#[instrument(name = "handler::update_order_status", skip(app_state, path, req_payload), fields(order_id = %path.as_ref()))]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<UpdateStatusRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let status: OrderStatus = req_payload.status.parse()?;

  order_service::update_order_status(&app_state.db_pool, order_id, status).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Order status updated successfully"
  })))
}
