//! Inventory item endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{JsonBody, PathParam};
use crate::{
    error::AppResult,
    models::{CreateItem, Item, QuantityAdjusted, QuantityAdjustment, UpdateItem},
};

/// List every item
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_items(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.services.items.list().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    JsonBody(data): JsonBody<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.services.items.create(data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace all mutable fields of an item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_item(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(data): JsonBody<UpdateItem>,
) -> AppResult<Json<Item>> {
    let item = state.services.items.replace(id, data).await?;
    Ok(Json(item))
}

/// Add a signed delta to an item's quantity
#[utoipa::path(
    post,
    path = "/items/{id}/update-quantity",
    tag = "items",
    params(("id" = i32, Path, description = "Item ID")),
    request_body = QuantityAdjustment,
    responses(
        (status = 200, description = "Quantity updated", body = QuantityAdjusted),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_quantity(
    State(state): State<crate::AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(data): JsonBody<QuantityAdjustment>,
) -> AppResult<Json<QuantityAdjusted>> {
    let item = state.services.items.adjust_quantity(id, data.quantity).await?;
    Ok(Json(QuantityAdjusted { success: true, item }))
}
