//! Inventory movement model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Inventory movement record (insert-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movement {
    pub id: i32,
    pub item_id: i32,
    pub order_id: Option<i32>,
    pub movement_type: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Create movement request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateMovement {
    pub item_id: Option<i32>,
    pub order_id: Option<i32>,
    pub movement_type: Option<String>,
    pub quantity: Option<i32>,
}
