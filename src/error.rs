//! Error types for the inventory server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid request body: {0}")]
    Request(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    Path(#[from] PathRejection),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Store { context, source } => {
                tracing::error!("{}: {:?}", context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
            AppError::Request(rejection) => {
                let msg = rejection.body_text();
                tracing::error!("Invalid request body: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Path(rejection) => {
                let msg = rejection.body_text();
                tracing::error!("Invalid path parameter: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Attach the operation context to a raw driver error
pub trait StoreContext<T> {
    fn context(self, context: &'static str) -> AppResult<T>;
}

impl<T> StoreContext<T> for Result<T, sqlx::Error> {
    fn context(self, context: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Store { context, source })
    }
}
