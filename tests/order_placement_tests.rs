// tests/order_placement_tests.rs
//
// Transactional properties of the order placement service, exercised against a
// real PostgreSQL. All tests here are #[ignore]d by default: start PostgreSQL,
// apply schema.sql and set DATABASE_URL, then run
//   cargo test -- --ignored --test-threads=1

mod common;

use common::*;
use serial_test::serial;
use storefront::errors::AppError;
use storefront::models::OrderStatus;
use storefront::services::order_service::{self, OrderLine};

fn line(product_id: i64, quantity: i64) -> OrderLine {
  OrderLine { product_id, quantity }
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn valid_order_creates_rows_and_decrements_stock() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  // Worked example from the design notes: stock 5, price 100, order 3.
  let product_id = insert_product(&pool, "P1", 100, 5).await;
  let customer_id = insert_customer(&pool, "Asha", "asha@example.com").await;

  let order_id = order_service::place_order(&pool, customer_id, &[line(product_id, 3)])
    .await
    .expect("order placement should succeed");

  assert_eq!(order_count(&pool).await, 1);
  assert_eq!(order_item_count(&pool).await, 1);
  assert_eq!(product_stock(&pool, product_id).await, 2);

  let (total_amount, status): (i64, OrderStatus) =
    sqlx::query_as("SELECT total_amount, status FROM orders WHERE order_id = $1")
      .bind(order_id)
      .fetch_one(&pool)
      .await
      .unwrap();
  assert_eq!(total_amount, 300);
  assert_eq!(status, OrderStatus::Pending);

  let item: storefront::models::OrderItem =
    sqlx::query_as("SELECT item_id, order_id, product_id, quantity, subtotal FROM order_items WHERE order_id = $1")
      .bind(order_id)
      .fetch_one(&pool)
      .await
      .unwrap();
  assert_eq!(item.order_id, order_id);
  assert_eq!(item.product_id, product_id);
  assert_eq!(item.quantity, 3);
  assert_eq!(item.subtotal, 300);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn committed_total_equals_sum_of_line_subtotals() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  let p1 = insert_product(&pool, "P1", 100, 10).await;
  let p2 = insert_product(&pool, "P2", 250, 10).await;
  let customer_id = insert_customer(&pool, "Asha", "asha@example.com").await;

  let order_id = order_service::place_order(&pool, customer_id, &[line(p1, 2), line(p2, 3)])
    .await
    .unwrap();

  let total_amount: i64 = sqlx::query_scalar("SELECT total_amount FROM orders WHERE order_id = $1")
    .bind(order_id)
    .fetch_one(&pool)
    .await
    .unwrap();
  let item_sum: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(subtotal), 0)::BIGINT FROM order_items WHERE order_id = $1")
    .bind(order_id)
    .fetch_one(&pool)
    .await
    .unwrap();

  assert_eq!(total_amount, 2 * 100 + 3 * 250);
  assert_eq!(total_amount, item_sum);
  assert_eq!(order_item_count(&pool).await, 2);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn insufficient_stock_rolls_back_everything() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  // Stock 2, request 5: the whole order must fail with no residue.
  let product_id = insert_product(&pool, "P1", 100, 2).await;
  let customer_id = insert_customer(&pool, "Asha", "asha@example.com").await;

  let err = order_service::place_order(&pool, customer_id, &[line(product_id, 5)])
    .await
    .unwrap_err();

  match err {
    AppError::InsufficientStock {
      product_id: pid,
      requested,
      available,
    } => {
      assert_eq!(pid, product_id);
      assert_eq!(requested, 5);
      assert_eq!(available, 2);
    }
    other => panic!("expected InsufficientStock, got {:?}", other),
  }
  assert!(err.to_string().to_lowercase().contains("insufficient stock"));

  assert_eq!(order_count(&pool).await, 0);
  assert_eq!(order_item_count(&pool).await, 0);
  assert_eq!(product_stock(&pool, product_id).await, 2);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn bad_line_undoes_earlier_lines_in_same_order() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  let good = insert_product(&pool, "Good", 100, 10).await;
  let scarce = insert_product(&pool, "Scarce", 100, 1).await;
  let customer_id = insert_customer(&pool, "Asha", "asha@example.com").await;

  // First line is satisfiable; second is not. Nothing may persist.
  let err = order_service::place_order(&pool, customer_id, &[line(good, 4), line(scarce, 2)])
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::InsufficientStock { .. }));

  assert_eq!(order_count(&pool).await, 0);
  assert_eq!(order_item_count(&pool).await, 0);
  assert_eq!(product_stock(&pool, good).await, 10);
  assert_eq!(product_stock(&pool, scarce).await, 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn unknown_product_rejects_whole_order() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  let good = insert_product(&pool, "Good", 100, 10).await;
  let customer_id = insert_customer(&pool, "Asha", "asha@example.com").await;

  let err = order_service::place_order(&pool, customer_id, &[line(good, 1), line(999_999, 1)])
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::UnknownProduct { product_id: 999_999 }));

  assert_eq!(order_count(&pool).await, 0);
  assert_eq!(product_stock(&pool, good).await, 10);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn unknown_customer_rejects_order() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  let product_id = insert_product(&pool, "P1", 100, 5).await;

  let err = order_service::place_order(&pool, 424_242, &[line(product_id, 1)])
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::UnknownCustomer { customer_id: 424_242 }));

  assert_eq!(order_count(&pool).await, 0);
  assert_eq!(product_stock(&pool, product_id).await, 5);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn concurrent_orders_for_same_product_never_oversell() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  // Stock 5; two concurrent orders of 3 each. The FOR UPDATE row lock must let
  // at most one commit, and stock must never go negative.
  let product_id = insert_product(&pool, "Contended", 100, 5).await;
  let c1 = insert_customer(&pool, "Asha", "asha@example.com").await;
  let c2 = insert_customer(&pool, "Ben", "ben@example.com").await;

  let pool_a = pool.clone();
  let pool_b = pool.clone();
  let task_a = tokio::spawn(async move { order_service::place_order(&pool_a, c1, &[line(product_id, 3)]).await });
  let task_b = tokio::spawn(async move { order_service::place_order(&pool_b, c2, &[line(product_id, 3)]).await });

  let result_a = task_a.await.unwrap();
  let result_b = task_b.await.unwrap();

  let successes = [&result_a, &result_b].iter().filter(|r| r.is_ok()).count();
  assert_eq!(successes, 1, "exactly one of the two contending orders may commit");

  let loser = if result_a.is_err() { result_a } else { result_b };
  assert!(matches!(loser.unwrap_err(), AppError::InsufficientStock { .. }));

  let stock = product_stock(&pool, product_id).await;
  assert_eq!(stock, 2);
  assert!(stock >= 0);
  assert_eq!(order_count(&pool).await, 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn repeated_reads_with_no_writes_are_identical() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  let product_id = insert_product(&pool, "P1", 100, 5).await;

  let first: (String, i64, i64) = sqlx::query_as("SELECT product_name, price, stock FROM products WHERE product_id = $1")
    .bind(product_id)
    .fetch_one(&pool)
    .await
    .unwrap();
  let second: (String, i64, i64) = sqlx::query_as("SELECT product_name, price, stock FROM products WHERE product_id = $1")
    .bind(product_id)
    .fetch_one(&pool)
    .await
    .unwrap();

  assert_eq!(first, second);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn status_update_round_trips_and_unknown_order_is_not_found() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  let product_id = insert_product(&pool, "P1", 100, 5).await;
  let customer_id = insert_customer(&pool, "Asha", "asha@example.com").await;
  let order_id = order_service::place_order(&pool, customer_id, &[line(product_id, 1)])
    .await
    .unwrap();

  order_service::update_order_status(&pool, order_id, OrderStatus::Shipped)
    .await
    .unwrap();
  let status: OrderStatus = sqlx::query_scalar("SELECT status FROM orders WHERE order_id = $1")
    .bind(order_id)
    .fetch_one(&pool)
    .await
    .unwrap();
  assert_eq!(status, OrderStatus::Shipped);

  let err = order_service::update_order_status(&pool, 999_999, OrderStatus::Delivered)
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL with schema.sql applied"]
async fn customer_stats_aggregate_orders_and_spend() {
  setup_tracing();
  let pool = test_pool().await;
  reset_tables(&pool).await;

  let p1 = insert_product(&pool, "P1", 100, 50).await;
  let customer_id = insert_customer(&pool, "Asha", "asha@example.com").await;
  let idle_customer_id = insert_customer(&pool, "Ben", "ben@example.com").await;

  order_service::place_order(&pool, customer_id, &[line(p1, 2)]).await.unwrap();
  order_service::place_order(&pool, customer_id, &[line(p1, 5)]).await.unwrap();

  let stats = storefront::services::customer_service::customer_stats(&pool, customer_id)
    .await
    .unwrap();
  assert_eq!(stats.total_orders, 2);
  assert_eq!(stats.total_spent, 2 * 100 + 5 * 100);

  let idle_stats = storefront::services::customer_service::customer_stats(&pool, idle_customer_id)
    .await
    .unwrap();
  assert_eq!(idle_stats.total_orders, 0);
  assert_eq!(idle_stats.total_spent, 0);
}
