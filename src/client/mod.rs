//! Client-side transport for note operations
//!
//! The editor session drives the note store through the [`NoteApi`] trait so
//! it never cares whether the store is across HTTP ([`HttpNoteApi`]) or in
//! the same process ([`LocalNoteApi`]). The error taxonomy keeps genuine
//! absence (`NotFound`) distinct from transport and backend failures so the
//! session can fall back to a fresh note only when it makes sense.

use crate::models::Note;
use crate::store::{NoteStore, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

mod http_api;

pub use http_api::HttpNoteApi;

/// Client-visible operation errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The note does not exist (including previously deleted)
    #[error("Note not found: {id}")]
    NotFound { id: String },

    /// The request could not complete (connection, timeout, bad response body)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server reported a failure (storage or other internal error)
    #[error("Server error ({code}): {message}")]
    Backend { code: String, message: String },
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id },
            other => ApiError::Backend {
                code: "STORAGE_ERROR".to_string(),
                message: other.to_string(),
            },
        }
    }
}

/// Note operations as seen from the client side.
#[async_trait]
pub trait NoteApi: Send + Sync {
    async fn create(&self, content: String) -> Result<Note, ApiError>;
    async fn read(&self, id: &str) -> Result<Note, ApiError>;
    async fn update(&self, id: &str, content: String) -> Result<Note, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// In-process transport wrapping a [`NoteStore`] directly.
///
/// Used by tests and by embedders that run the session and the store in the
/// same process; behavior matches the HTTP transport minus the wire.
pub struct LocalNoteApi {
    store: Arc<dyn NoteStore>,
}

impl LocalNoteApi {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NoteApi for LocalNoteApi {
    async fn create(&self, content: String) -> Result<Note, ApiError> {
        Ok(self.store.create(content).await?)
    }

    async fn read(&self, id: &str) -> Result<Note, ApiError> {
        Ok(self.store.read(id).await?)
    }

    async fn update(&self, id: &str, content: String) -> Result<Note, ApiError> {
        Ok(self.store.update(id, content).await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        Ok(self.store.delete(id).await?)
    }
}
