//! NoteStore Trait - Persistence Abstraction Layer
//!
//! Abstracts durable note CRUD behind a trait so the HTTP layer and the
//! in-process [`LocalNoteApi`](crate::client::LocalNoteApi) work against any
//! backend. All methods are async; implementations must be `Send + Sync`
//! so they can be shared across request handlers via `Arc<dyn NoteStore>`.
//!
//! # Concurrency
//!
//! Concurrent updates to the same id are not coordinated; the last write to
//! physically complete wins. Implementations must only guarantee that a
//! single update or delete does not interleave with itself (atomic record
//! replacement is sufficient).

use crate::models::Note;
use crate::store::StoreError;
use async_trait::async_trait;

/// Durable CRUD for note records, one record per id.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Create a new note with the given content.
    ///
    /// Generates a fresh, collision-resistant id, sets both timestamps to
    /// now, persists the record, and returns it in full. Fails only on
    /// underlying storage I/O.
    async fn create(&self, content: String) -> Result<Note, StoreError>;

    /// Get the note for `id`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no such record exists, including records
    /// that were previously deleted.
    async fn read(&self, id: &str) -> Result<Note, StoreError>;

    /// Replace the note's content wholesale and refresh `updated_at`.
    ///
    /// Returns the updated record. `StoreError::NotFound` if the record
    /// does not exist.
    async fn update(&self, id: &str, content: String) -> Result<Note, StoreError>;

    /// Remove the record for `id` permanently.
    ///
    /// The id becomes invalid forever, with no reuse and no recreation
    /// under the same id. `StoreError::NotFound` if the record does not
    /// exist.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
