//! Router assembly for the dish and order routes

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::dishes::handlers::{create_dish, list_dishes, read_dish, update_dish};
use crate::orders::handlers::{create_order, delete_order, list_orders, read_order, update_order};

use super::AppState;

/// Build the application router
///
/// - `GET|POST /dishes`, `GET|PUT /dishes/{dishId}`
/// - `GET|POST /orders`, `GET|PUT|DELETE /orders/{orderId}`
/// - `GET /health`, `GET /healthz`
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/dishes", get(list_dishes).post(create_dish))
        .route("/dishes/{dishId}", get(read_dish).put(update_dish))
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{orderId}",
            get(read_order).put(update_order).delete(delete_order),
        )
        .with_state(state)
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "eatery"
    }))
}
