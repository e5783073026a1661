//! HTTP transport for the notes API
//!
//! Talks to the server's `/api/notes` endpoints with reqwest. A 404 maps to
//! `ApiError::NotFound`; any other non-success status becomes `Backend` with
//! whatever structured error body the server sent; connection-level failures
//! become `Transport`. No bespoke request timeout is set; the underlying
//! client's limits apply.

use crate::client::{ApiError, NoteApi};
use crate::models::Note;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

/// reqwest-backed implementation of [`NoteApi`].
#[derive(Debug, Clone)]
pub struct HttpNoteApi {
    client: reqwest::Client,
    base_url: String,
}

/// Error body shape sent by the server on failure.
#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
    code: String,
}

impl HttpNoteApi {
    /// Create a transport for a server at `base_url`, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/api/notes/{id}", self.base_url)
    }

    /// Map a non-success response to the client error taxonomy.
    async fn error_for(&self, id: Option<&str>, response: Response) -> ApiError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return ApiError::NotFound {
                id: id.unwrap_or_default().to_string(),
            };
        }
        match response.json::<WireError>().await {
            Ok(wire) => ApiError::Backend {
                code: wire.code,
                message: wire.message,
            },
            Err(_) => ApiError::Backend {
                code: status.as_u16().to_string(),
                message: format!("request failed with status {status}"),
            },
        }
    }

    async fn note_from(&self, id: Option<&str>, response: Response) -> Result<Note, ApiError> {
        if !response.status().is_success() {
            return Err(self.error_for(id, response).await);
        }
        response
            .json::<Note>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

#[async_trait]
impl NoteApi for HttpNoteApi {
    async fn create(&self, content: String) -> Result<Note, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/notes", self.base_url))
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.note_from(None, response).await
    }

    async fn read(&self, id: &str) -> Result<Note, ApiError> {
        let response = self
            .client
            .get(self.note_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.note_from(Some(id), response).await
    }

    async fn update(&self, id: &str, content: String) -> Result<Note, ApiError> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.note_from(Some(id), response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(self.error_for(Some(id), response).await);
        }
        Ok(())
    }
}
