// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models::Product;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products: Vec<Product> = sqlx::query_as(
    "SELECT product_id, product_name, category, price, stock, description, created_at FROM products WHERE stock > 0 ORDER BY created_at DESC",
  )
  .fetch_all(&app_state.db_pool)
  .await
  .map_err(|e| {
    error!("Failed to fetch products from database: {}", e);
    AppError::Sqlx(e)
  })?;

  info!("Fetched {} in-stock products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product_opt: Option<Product> = sqlx::query_as(
    "SELECT product_id, product_name, category, price, stock, description, created_at FROM products WHERE product_id = $1",
  )
  .bind(product_id)
  .fetch_optional(&app_state.db_pool)
  .await?;

  match product_opt {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::list_products_by_category", skip(app_state, path), fields(category = %path.as_ref()))]
pub async fn list_products_by_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = path.into_inner();

  let products: Vec<Product> = sqlx::query_as(
    "SELECT product_id, product_name, category, price, stock, description, created_at FROM products WHERE category = $1 AND stock > 0",
  )
  .bind(&category)
  .fetch_all(&app_state.db_pool)
  .await?;

  info!("Fetched {} in-stock products in category '{}'.", products.len(), category);
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories: Vec<String> = sqlx::query_scalar("SELECT DISTINCT category FROM products ORDER BY category")
    .fetch_all(&app_state.db_pool)
    .await?;

  Ok(HttpResponse::Ok().json(categories))
}
