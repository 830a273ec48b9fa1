//! Business logic services

pub mod items;
pub mod movements;
pub mod orders;

use std::sync::Arc;

use crate::{
    models::ItemDefaults,
    repository::{ItemStore, MovementStore, OrderStore, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub items: items::ItemsService,
    pub movements: movements::MovementsService,
    pub orders: orders::OrdersService,
}

impl Services {
    /// Create all services backed by the given repository
    pub fn new(repository: Repository, item_defaults: ItemDefaults) -> Self {
        Self::with_stores(
            Arc::new(repository.items),
            Arc::new(repository.movements),
            Arc::new(repository.orders),
            item_defaults,
        )
    }

    /// Create all services over arbitrary store implementations
    pub fn with_stores(
        items: Arc<dyn ItemStore>,
        movements: Arc<dyn MovementStore>,
        orders: Arc<dyn OrderStore>,
        item_defaults: ItemDefaults,
    ) -> Self {
        Self {
            items: items::ItemsService::new(items, item_defaults),
            movements: movements::MovementsService::new(movements),
            orders: orders::OrdersService::new(orders),
        }
    }
}
