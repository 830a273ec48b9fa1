//! HTTP client for the inventory API

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    CreateItem, CreateMovement, Item, Movement, Order, QuantityAdjusted, QuantityAdjustment,
    UpdateItem,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded {status}: {body}")]
    Status { status: u16, body: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Clone)]
pub struct InventoryClient {
    http: Client,
    base_url: String,
}

impl InventoryClient {
    /// `base_url` is the server root, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_items(&self) -> ClientResult<Vec<Item>> {
        let response = self.http.get(self.url("/items")).send().await?;
        decode(response).await
    }

    pub async fn create_item(&self, item: &CreateItem) -> ClientResult<Item> {
        let response = self.http.post(self.url("/items")).json(item).send().await?;
        decode(response).await
    }

    pub async fn replace_item(&self, id: i32, item: &UpdateItem) -> ClientResult<Item> {
        let response = self
            .http
            .put(self.url(&format!("/items/{}", id)))
            .json(item)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn adjust_quantity(&self, id: i32, delta: i32) -> ClientResult<QuantityAdjusted> {
        let response = self
            .http
            .post(self.url(&format!("/items/{}/update-quantity", id)))
            .json(&QuantityAdjustment { quantity: delta })
            .send()
            .await?;
        decode(response).await
    }

    pub async fn record_movement(&self, movement: &CreateMovement) -> ClientResult<Movement> {
        let response = self
            .http
            .post(self.url("/inventory_movements"))
            .json(movement)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        let response = self.http.get(self.url("/orders")).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}
