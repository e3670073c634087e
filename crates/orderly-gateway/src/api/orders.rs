use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use orderly_core::Order;

use crate::app_state::AppState;
use crate::error::ApiResult;

// POST /orders/  body: [1, 2, 3]
pub async fn create_order(
    State(state): State<AppState>,
    Json(product_ids): Json<Vec<u64>>,
) -> ApiResult<Response> {
    let order = state.orders().create_order(&product_ids)?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, order.id.to_string())],
        Json(order),
    )
        .into_response())
}

// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders().list_orders())
}

// GET /orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Order>> {
    let order = state.orders().get_order(id)?;
    tracing::debug!(order_id = id, "order fetched");
    Ok(Json(order))
}

// DELETE /orders/:id
// Deleting an absent order still answers 200.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    match state.orders().delete_order(id) {
        Ok(_) => Ok(StatusCode::OK),
        Err(e) if e.is_not_found() => {
            tracing::debug!(order_id = id, "delete of unknown order ignored");
            Ok(StatusCode::OK)
        }
        Err(e) => Err(e.into()),
    }
}

// POST /orders/:id/checkout
pub async fn checkout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    state.orders().checkout(id)?;
    Ok(StatusCode::OK)
}
