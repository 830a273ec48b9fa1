//! Repository layer for database operations

pub mod items;
#[cfg(test)]
pub(crate) mod memory;
pub mod movements;
pub mod orders;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{CreateMovement, Item, Movement, NewItem, Order, UpdateItem},
};

/// Persistence for inventory items
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every item, in id order
    async fn list(&self) -> AppResult<Vec<Item>>;

    async fn create(&self, item: NewItem) -> AppResult<Item>;

    /// Overwrite all mutable fields; `None` when no row has `id`
    async fn replace(&self, id: i32, item: UpdateItem) -> AppResult<Option<Item>>;

    /// Add `delta` to the stored quantity; `None` when no row has `id`
    async fn adjust_quantity(&self, id: i32, delta: i32) -> AppResult<Option<Item>>;
}

/// Persistence for inventory movements (insert-only)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovementStore: Send + Sync {
    async fn create(&self, movement: CreateMovement) -> AppResult<Movement>;
}

/// Read access to orders
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Order>>;
}

/// Pool-backed repositories, one per table
#[derive(Clone)]
pub struct Repository {
    pub items: items::ItemsRepository,
    pub movements: movements::MovementsRepository,
    pub orders: orders::OrdersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            items: items::ItemsRepository::new(pool.clone()),
            movements: movements::MovementsRepository::new(pool.clone()),
            orders: orders::OrdersRepository::new(pool),
        }
    }
}
