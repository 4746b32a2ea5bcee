//! Error types for the employee API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Api Error Enum ==
/// Unified error type for the HTTP handlers.
///
/// Only [`ApiError::NotFound`] and [`ApiError::Unavailable`] map to something
/// other than 500.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body was not a valid employee
    #[error("{0}")]
    Decode(#[source] serde_json::Error),

    /// Store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Path segment is not a valid identifier
    #[error("invalid employee id: {0}")]
    InvalidId(String),

    /// Direct lookup found nothing
    #[error("{0}")]
    NotFound(String),

    /// Response body could not be encoded
    #[error("{0}")]
    Serialization(#[source] serde_json::Error),

    /// Store did not answer a health check
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Decode(_)
            | ApiError::Store(_)
            | ApiError::InvalidId(_)
            | ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        warn!(%status, error = %message, "Request failed");

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
