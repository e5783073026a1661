//! In-memory note store
//!
//! Map-backed implementation of [`NoteStore`] with the same observable
//! semantics as the filesystem backend. Used by tests and by in-process
//! sessions that don't need durability.

use crate::models::Note;
use crate::store::{NoteStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Non-durable store keeping all records in a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RwLock<HashMap<String, Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no records exist. Test helper; no enumeration is part of
    /// the store contract.
    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create(&self, content: String) -> Result<Note, StoreError> {
        let note = Note::new(content);
        self.notes
            .write()
            .await
            .insert(note.id.clone(), note.clone());
        Ok(note)
    }

    async fn read(&self, id: &str) -> Result<Note, StoreError> {
        self.notes
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn update(&self, id: &str, content: String) -> Result<Note, StoreError> {
        let mut notes = self.notes.write().await;
        let note = notes.get_mut(id).ok_or_else(|| StoreError::not_found(id))?;
        note.set_content(content);
        Ok(note.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.notes
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }
}
