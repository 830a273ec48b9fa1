//! Orders repository

use async_trait::async_trait;
use sqlx::{types::Json, Pool, Postgres};

use super::OrderStore;
use crate::{
    error::{AppResult, StoreContext},
    models::Order,
};

#[derive(Clone)]
pub struct OrdersRepository {
    pool: Pool<Postgres>,
}

impl OrdersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for OrdersRepository {
    /// Rows are serialized by Postgres so whatever columns exist are returned
    async fn list(&self) -> AppResult<Vec<Order>> {
        let rows = sqlx::query_scalar::<_, Json<serde_json::Value>>(
            "SELECT to_jsonb(o) FROM orders o ORDER BY o.id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Error fetching orders")?;
        Ok(rows.into_iter().map(|Json(row)| Order(row)).collect())
    }
}
