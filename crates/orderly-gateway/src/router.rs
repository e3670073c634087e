//! Axum router wiring.
//!
//! Order and product endpoints plus the ops routes (`/healthz`, `/readyz`,
//! `/metrics`).

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(api::orders::list_orders).post(api::orders::create_order))
        .route("/orders/", post(api::orders::create_order))
        .route("/orders/:id", get(api::orders::get_order).delete(api::orders::delete_order))
        .route("/orders/:id/checkout", post(api::orders::checkout))
        .route("/product", post(api::products::create_product))
        .route("/products", get(api::products::list_products))
        .route("/products/:id", get(api::products::get_product))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
