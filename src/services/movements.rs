//! Inventory movements service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{CreateMovement, Movement},
    repository::MovementStore,
};

#[derive(Clone)]
pub struct MovementsService {
    store: Arc<dyn MovementStore>,
}

impl MovementsService {
    pub fn new(store: Arc<dyn MovementStore>) -> Self {
        Self { store }
    }

    /// Record a movement. `item_id` and `order_id` are not checked against their tables.
    pub async fn record(&self, data: CreateMovement) -> AppResult<Movement> {
        let movement = self.store.create(data).await?;
        tracing::info!(
            "Recorded {} movement id={} for item id={}",
            movement.movement_type,
            movement.id,
            movement.item_id
        );
        Ok(movement)
    }
}
