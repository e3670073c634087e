use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use orderly_core::{OrderlyError, Product};

use crate::app_state::AppState;
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct CreateProductQuery {
    pub name: Option<String>,
    pub price: String,
}

// POST /product?name=..&price=..
pub async fn create_product(
    State(state): State<AppState>,
    Query(q): Query<CreateProductQuery>,
) -> ApiResult<Response> {
    let price: Decimal = q
        .price
        .trim()
        .parse()
        .map_err(|e| OrderlyError::BadRequest(format!("invalid price {:?}: {e}", q.price)))?;

    let product = state.orders().create_product(q.name, price);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, product.id.to_string())],
        Json(product),
    )
        .into_response())
}

// GET /products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.orders().list_products())
}

// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.orders().get_product(id)?))
}
