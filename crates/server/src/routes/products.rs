//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use order_gate_core::Product;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for listing products.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
}

/// List the product catalog.
pub async fn list_products(State(state): State<AppState>) -> Json<ListProductsResponse> {
    Json(ListProductsResponse {
        products: state.products().list(),
    })
}

/// Fetch one product.
///
/// # Errors
///
/// Returns `NotFound` if no product has this id.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    state
        .products()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
