//! Inventory movement endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::JsonBody;
use crate::{
    error::AppResult,
    models::{CreateMovement, Movement},
};

/// Record an inventory movement
#[utoipa::path(
    post,
    path = "/inventory_movements",
    tag = "movements",
    request_body = CreateMovement,
    responses(
        (status = 201, description = "Movement recorded", body = Movement),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_movement(
    State(state): State<crate::AppState>,
    JsonBody(data): JsonBody<CreateMovement>,
) -> AppResult<(StatusCode, Json<Movement>)> {
    let movement = state.services.movements.record(data).await?;
    Ok((StatusCode::CREATED, Json(movement)))
}
