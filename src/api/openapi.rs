//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, items, movements, orders};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "1.0.0",
        description = "Warehouse inventory REST API"
    ),
    paths(
        health::health_check,
        items::list_items,
        items::create_item,
        items::replace_item,
        items::update_quantity,
        movements::create_movement,
        orders::list_orders,
    ),
    components(
        schemas(
            crate::models::item::Item,
            crate::models::item::CreateItem,
            crate::models::item::UpdateItem,
            crate::models::item::QuantityAdjustment,
            crate::models::item::QuantityAdjusted,
            crate::models::movement::Movement,
            crate::models::movement::CreateMovement,
            crate::models::order::Order,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "items", description = "Inventory item management"),
        (name = "movements", description = "Inventory movement log"),
        (name = "orders", description = "Orders")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
