//! Inventory items service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{CreateItem, Item, ItemDefaults, UpdateItem},
    repository::ItemStore,
};

#[derive(Clone)]
pub struct ItemsService {
    store: Arc<dyn ItemStore>,
    defaults: ItemDefaults,
}

impl ItemsService {
    pub fn new(store: Arc<dyn ItemStore>, defaults: ItemDefaults) -> Self {
        Self { store, defaults }
    }

    pub async fn list(&self) -> AppResult<Vec<Item>> {
        self.store.list().await
    }

    /// Create an item, filling omitted status fields from the configured defaults
    pub async fn create(&self, data: CreateItem) -> AppResult<Item> {
        let item = self.store.create(data.with_defaults(&self.defaults)).await?;
        tracing::info!("Created item id={} name={:?}", item.id, item.name);
        Ok(item)
    }

    /// Replace every mutable field of an item. Last write wins.
    pub async fn replace(&self, id: i32, data: UpdateItem) -> AppResult<Item> {
        let item = self
            .store
            .replace(id, data)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
        tracing::info!("Replaced item id={}", id);
        Ok(item)
    }

    /// Add a signed delta to an item's quantity. The result may go negative.
    pub async fn adjust_quantity(&self, id: i32, delta: i32) -> AppResult<Item> {
        let item = self
            .store
            .adjust_quantity(id, delta)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
        tracing::info!("Adjusted quantity of item id={} by {} to {}", id, delta, item.quantity);
        Ok(item)
    }
}
