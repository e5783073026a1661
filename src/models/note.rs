//! Note record
//!
//! The sole persisted entity. A note is a flat record with no relationships
//! to other notes; its id is generated once at creation and never changes.
//! The id is also the sharing token, so generation must be collision
//! resistant (UUID v4, never a counter that could collide across restarts).
//!
//! # Examples
//!
//! ```rust
//! use notelite::models::Note;
//!
//! let note = Note::new("# Hello".to_string());
//! assert_eq!(note.content, "# Hello");
//! assert_eq!(note.created_at, note.updated_at);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single note record as persisted and as sent over the wire.
///
/// Serializes with camelCase field names (`createdAt`, `updatedAt`); the
/// on-disk JSON and the HTTP bodies use the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier, UUID v4, immutable after creation
    pub id: String,
    /// Raw markup source, replaced wholesale on every update
    pub content: String,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful content update
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with a fresh id and both timestamps set to now.
    pub fn new(content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content and refresh `updated_at`.
    ///
    /// `id` and `created_at` are untouched; updates are full replacements,
    /// never partial patches.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
