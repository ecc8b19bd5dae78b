// src/web/handlers/stats_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

/// Dashboard aggregates for the back-office landing page.
///
/// The five scalar queries run sequentially on the shared pool; each is
/// independent of the others.
#[instrument(name = "handler::dashboard_stats", skip(app_state))]
pub async fn dashboard_stats_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let pool = &app_state.db_pool;

  let total_revenue: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(total_amount), 0)::BIGINT FROM orders")
    .fetch_one(pool)
    .await?;
  let total_orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders").fetch_one(pool).await?;
  let total_customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
    .fetch_one(pool)
    .await?;
  let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
    .fetch_one(pool)
    .await?;
  let low_stock: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE stock < 5")
    .fetch_one(pool)
    .await?;

  Ok(HttpResponse::Ok().json(json!({
      "totalRevenue": total_revenue,
      "totalOrders": total_orders,
      "totalCustomers": total_customers,
      "totalProducts": total_products,
      "lowStock": low_stock
  })))
}
