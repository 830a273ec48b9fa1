//! Order model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order row, passed through as the JSON object the store produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order(#[schema(value_type = Object)] pub serde_json::Value);
