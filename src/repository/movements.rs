//! Inventory movements repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::MovementStore;
use crate::{
    error::{AppResult, StoreContext},
    models::{CreateMovement, Movement},
};

#[derive(Clone)]
pub struct MovementsRepository {
    pool: Pool<Postgres>,
}

impl MovementsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovementStore for MovementsRepository {
    async fn create(&self, movement: CreateMovement) -> AppResult<Movement> {
        sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO inventory_movements (item_id, order_id, movement_type, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(movement.item_id)
        .bind(movement.order_id)
        .bind(&movement.movement_type)
        .bind(movement.quantity)
        .fetch_one(&self.pool)
        .await
        .context("Error recording inventory movement")
    }
}
