// src/web/handlers/customer_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::Customer;
use crate::services::customer_service::{self, NewCustomer};
use crate::state::AppState;

#[instrument(name = "handler::list_customers", skip(app_state))]
pub async fn list_customers_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let customers: Vec<Customer> = sqlx::query_as(
    "SELECT customer_id, name, email, phone, address, created_at FROM customers ORDER BY created_at DESC",
  )
  .fetch_all(&app_state.db_pool)
  .await?;

  Ok(HttpResponse::Ok().json(customers))
}

#[instrument(name = "handler::get_customer", skip(app_state, path), fields(customer_id = %path.as_ref()))]
pub async fn get_customer_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let customer_id = path.into_inner();

  let customer_opt: Option<Customer> = sqlx::query_as(
    "SELECT customer_id, name, email, phone, address, created_at FROM customers WHERE customer_id = $1",
  )
  .bind(customer_id)
  .fetch_optional(&app_state.db_pool)
  .await?;

  match customer_opt {
    Some(customer) => Ok(HttpResponse::Ok().json(customer)),
    None => {
      warn!("Customer with ID {} not found.", customer_id);
      Err(AppError::NotFound(format!("Customer with ID {} not found.", customer_id)))
    }
  }
}

#[instrument(name = "handler::create_customer", skip(app_state, req_payload), fields(email = %req_payload.email))]
pub async fn create_customer_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewCustomer>,
) -> Result<HttpResponse, AppError> {
  let customer_id = customer_service::create_customer(&app_state.db_pool, &req_payload).await?;

  info!("Customer {} added via API.", customer_id);
  Ok(HttpResponse::Created().json(json!({
      "message": "Customer added successfully",
      "customerId": customer_id
  })))
}

#[instrument(name = "handler::customer_orders", skip(app_state, path), fields(customer_id = %path.as_ref()))]
pub async fn customer_orders_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let customer_id = path.into_inner();
  let orders = customer_service::customer_orders(&app_state.db_pool, customer_id).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::customer_stats", skip(app_state, path), fields(customer_id = %path.as_ref()))]
pub async fn customer_stats_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let customer_id = path.into_inner();
  let stats = customer_service::customer_stats(&app_state.db_pool, customer_id).await?;
  Ok(HttpResponse::Ok().json(stats))
}
