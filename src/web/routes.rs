// src/web/routes.rs

use actix_web::web;

// Simple liveness probe. In a real deployment this might also check DB
// connectivity.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` (and the integration tests) to configure services for the
// Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Product Routes
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/category/{category}",
            web::get().to(crate::web::handlers::product_handlers::list_products_by_category_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          ),
      )
      .route(
        "/categories",
        web::get().to(crate::web::handlers::product_handlers::list_categories_handler),
      )
      // Customer Routes
      .service(
        web::scope("/customers")
          .route(
            "",
            web::get().to(crate::web::handlers::customer_handlers::list_customers_handler),
          )
          .route(
            "",
            web::post().to(crate::web::handlers::customer_handlers::create_customer_handler),
          )
          .route(
            "/{customer_id}",
            web::get().to(crate::web::handlers::customer_handlers::get_customer_handler),
          )
          .route(
            "/{customer_id}/orders",
            web::get().to(crate::web::handlers::customer_handlers::customer_orders_handler),
          )
          .route(
            "/{customer_id}/stats",
            web::get().to(crate::web::handlers::customer_handlers::customer_stats_handler),
          ),
      )
      // Order Routes
      .service(
        web::scope("/orders")
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
          )
          .route(
            "",
            web::post().to(crate::web::handlers::order_handlers::place_order_handler),
          )
          .route(
            "/multi",
            web::post().to(crate::web::handlers::order_handlers::place_multi_order_handler),
          )
          .route(
            "/{order_id}",
            web::get().to(crate::web::handlers::order_handlers::get_order_handler),
          )
          .route(
            "/{order_id}/status",
            web::patch().to(crate::web::handlers::order_handlers::update_order_status_handler),
          ),
      )
      // Dashboard Stats Route
      .route(
        "/stats",
        web::get().to(crate::web::handlers::stats_handlers::dashboard_stats_handler),
      ),
  );
}
