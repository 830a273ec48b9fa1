//! API handlers for the inventory REST endpoints

pub mod health;
pub mod items;
pub mod movements;
pub mod openapi;
pub mod orders;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejection is reported as an [`AppError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path extractor whose rejection is reported as an [`AppError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/health", get(health::health_check))
        // Items
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/:id", put(items::replace_item))
        .route("/items/:id/update-quantity", post(items::update_quantity))
        // Movements
        .route("/inventory_movements", post(movements::create_movement))
        // Orders
        .route("/orders", get(orders::list_orders))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
