//! Order endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Order};

/// List every order
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_orders(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.services.orders.list().await?;
    Ok(Json(orders))
}
