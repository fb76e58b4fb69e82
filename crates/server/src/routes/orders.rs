//! Order route handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use order_gate_core::{Acknowledgement, Order};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Response for listing orders.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<Order>,
}

/// Create an order.
///
/// Runs the validation pipeline; only a fully valid order is stored.
///
/// # Errors
///
/// Returns an error if the body is not an order or the order is rejected.
#[instrument(skip(state, body))]
pub async fn create_order(
    State(state): State<AppState>,
    body: std::result::Result<Json<Order>, JsonRejection>,
) -> Result<Json<Acknowledgement>> {
    let Json(order) = body?;
    let ack = state.orders().create_order(order).await?;
    Ok(Json(ack))
}

/// List every accepted order.
#[instrument(skip(state))]
pub async fn list_orders(State(state): State<AppState>) -> Json<ListOrdersResponse> {
    Json(ListOrdersResponse {
        orders: state.orders().list_orders().await,
    })
}
