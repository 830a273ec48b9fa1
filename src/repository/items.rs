//! Items repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::ItemStore;
use crate::{
    error::{AppResult, StoreContext},
    models::{Item, NewItem, UpdateItem},
};

#[derive(Clone)]
pub struct ItemsRepository {
    pool: Pool<Postgres>,
}

impl ItemsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemsRepository {
    async fn list(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Error fetching items")
    }

    async fn create(&self, item: NewItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items
                (name, description, barcode, quantity, photo_url, missing, damaged, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.barcode)
        .bind(item.quantity)
        .bind(&item.photo_url)
        .bind(item.missing)
        .bind(item.damaged)
        .bind(&item.notes)
        .fetch_one(&self.pool)
        .await
        .context("Error creating item")
    }

    async fn replace(&self, id: i32, item: UpdateItem) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $1, description = $2, barcode = $3, quantity = $4,
                photo_url = $5, missing = $6, damaged = $7, notes = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.barcode)
        .bind(item.quantity)
        .bind(&item.photo_url)
        .bind(item.missing)
        .bind(item.damaged)
        .bind(&item.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Error updating item")
    }

    async fn adjust_quantity(&self, id: i32, delta: i32) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET quantity = quantity + $1 WHERE id = $2 RETURNING *",
        )
        .bind(delta)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Error updating quantity")
    }
}
