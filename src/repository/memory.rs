//! In-memory stores mirroring the table constraints, for tests

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{ItemStore, MovementStore, OrderStore};
use crate::{
    error::{AppError, AppResult},
    models::{CreateMovement, Item, ItemDefaults, Movement, NewItem, Order, UpdateItem},
    services::Services,
};

fn not_null(context: &'static str, column: &str) -> AppError {
    AppError::Store {
        context,
        source: sqlx::Error::Protocol(format!(
            "null value in column \"{column}\" violates not-null constraint"
        )),
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    items: Mutex<Vec<Item>>,
    movements: Mutex<Vec<Movement>>,
    orders: Vec<Order>,
}

impl MemoryStore {
    pub(crate) fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Default::default()
        }
    }

    pub(crate) fn into_services(self) -> Services {
        let store = Arc::new(self);
        Services::with_stores(store.clone(), store.clone(), store, ItemDefaults::default())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Item>> {
        Ok(self.items.lock().await.clone())
    }

    async fn create(&self, item: NewItem) -> AppResult<Item> {
        const CONTEXT: &str = "Error creating item";
        let mut items = self.items.lock().await;
        let created = Item {
            id: items.last().map_or(1, |last| last.id + 1),
            name: item.name.ok_or_else(|| not_null(CONTEXT, "name"))?,
            description: item.description,
            barcode: item.barcode,
            quantity: item.quantity.ok_or_else(|| not_null(CONTEXT, "quantity"))?,
            photo_url: item.photo_url,
            missing: item.missing,
            damaged: item.damaged,
            notes: item.notes,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn replace(&self, id: i32, item: UpdateItem) -> AppResult<Option<Item>> {
        const CONTEXT: &str = "Error updating item";
        let mut items = self.items.lock().await;
        let Some(slot) = items.iter_mut().find(|existing| existing.id == id) else {
            return Ok(None);
        };
        *slot = Item {
            id,
            name: item.name.ok_or_else(|| not_null(CONTEXT, "name"))?,
            description: item.description,
            barcode: item.barcode,
            quantity: item.quantity.ok_or_else(|| not_null(CONTEXT, "quantity"))?,
            photo_url: item.photo_url,
            missing: item.missing.ok_or_else(|| not_null(CONTEXT, "missing"))?,
            damaged: item.damaged.ok_or_else(|| not_null(CONTEXT, "damaged"))?,
            notes: item.notes.ok_or_else(|| not_null(CONTEXT, "notes"))?,
        };
        Ok(Some(slot.clone()))
    }

    async fn adjust_quantity(&self, id: i32, delta: i32) -> AppResult<Option<Item>> {
        let mut items = self.items.lock().await;
        Ok(items.iter_mut().find(|item| item.id == id).map(|item| {
            item.quantity += delta;
            item.clone()
        }))
    }
}

#[async_trait]
impl MovementStore for MemoryStore {
    async fn create(&self, movement: CreateMovement) -> AppResult<Movement> {
        const CONTEXT: &str = "Error recording inventory movement";
        let mut movements = self.movements.lock().await;
        let created = Movement {
            id: movements.len() as i32 + 1,
            item_id: movement.item_id.ok_or_else(|| not_null(CONTEXT, "item_id"))?,
            order_id: movement.order_id,
            movement_type: movement
                .movement_type
                .ok_or_else(|| not_null(CONTEXT, "movement_type"))?,
            quantity: movement.quantity.ok_or_else(|| not_null(CONTEXT, "quantity"))?,
            created_at: Utc::now(),
        };
        movements.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.clone())
    }
}
