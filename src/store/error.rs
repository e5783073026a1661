//! Store Error Types
//!
//! Error types for note persistence. `NotFound` is signaled distinctly from
//! I/O failure so callers can apply fallback-to-new-note logic only on
//! genuine absence.

use thiserror::Error;

/// Note store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record exists for the given id (including previously deleted ids)
    #[error("Note not found: {id}")]
    NotFound { id: String },

    /// Underlying storage I/O failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be encoded or decoded
    #[error("Failed to (de)serialize note record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a not-found error for the given id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// True if this error means the record is absent rather than unreadable
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
