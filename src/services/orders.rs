//! Orders service

use std::sync::Arc;

use crate::{error::AppResult, models::Order, repository::OrderStore};

#[derive(Clone)]
pub struct OrdersService {
    store: Arc<dyn OrderStore>,
}

impl OrdersService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Order>> {
        self.store.list().await
    }
}
