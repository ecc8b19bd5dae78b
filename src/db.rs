// src/db.rs

//! Database bootstrap helpers.

use crate::errors::AppError;
use sqlx::PgPool;
use tracing::info;

/// Seeds a handful of demo products when the catalog is empty. Controlled by
/// the SEED_DB config flag; does nothing on a populated database.
pub async fn seed_demo_data(pool: &PgPool) -> Result<(), AppError> {
  let product_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(pool).await?;
  if product_count > 0 {
    info!("Catalog already has {} products; skipping seed.", product_count);
    return Ok(());
  }

  // (name, category, price in minor units, stock, description)
  let demo_products: [(&str, &str, i64, i64, &str); 5] = [
    ("Mechanical Keyboard", "Electronics", 450_000, 25, "87-key hot-swappable board"),
    ("Wireless Mouse", "Electronics", 150_000, 40, "2.4 GHz, 6 buttons"),
    ("Desk Lamp", "Home", 89_900, 15, "Adjustable LED, warm/cool"),
    ("Notebook A5", "Stationery", 19_900, 120, "Dotted, 160 pages"),
    ("Water Bottle 1L", "Home", 64_900, 60, "Insulated stainless steel"),
  ];

  for (name, category, price, stock, description) in demo_products {
    sqlx::query("INSERT INTO products (product_name, category, price, stock, description) VALUES ($1, $2, $3, $4, $5)")
      .bind(name)
      .bind(category)
      .bind(price)
      .bind(stock)
      .bind(description)
      .execute(pool)
      .await?;
  }

  info!("Seeded {} demo products.", demo_products.len());
  Ok(())
}
