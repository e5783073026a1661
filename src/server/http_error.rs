//! HTTP error handling for the notes API
//!
//! Provides consistent JSON error responses across all endpoints.

use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "NOTE_NOT_FOUND" => StatusCode::NOT_FOUND,
            "INVALID_INPUT" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => {
                HttpError::new(format!("Note not found: {id}"), "NOTE_NOT_FOUND")
            }
            // Storage details stay server-side; the client sees a generic
            // failure either way.
            StoreError::Io(_) | StoreError::Serialization(_) => {
                HttpError::new("Storage operation failed", "STORAGE_ERROR")
            }
        }
    }
}
