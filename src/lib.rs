//! Warehouse inventory dashboard
//!
//! A REST JSON API over a single Postgres inventory table, plus a headless
//! dashboard client that loads, searches and edits items through that API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
