//! notelite: minimal shareable markdown notepad
//!
//! This crate provides the note persistence and synchronization core for a
//! tiny note-taking web application: a file-backed note store with an HTTP
//! API, and a client-side editor session that debounces edits into
//! fire-and-forget saves.
//!
//! # Architecture
//!
//! - **One record per note**: a flat keyed space, addressed only by id. The
//!   id doubles as the sharing token (`?note=<id>` on the page URL).
//! - **Last-write-wins**: concurrent updates to the same note are not
//!   coordinated; the last write to physically complete is kept.
//! - **Local-first editing**: the session's in-memory text is the source of
//!   truth for what the user sees; save responses never overwrite it.
//!
//! # Modules
//!
//! - [`models`] - The `Note` record
//! - [`store`] - `NoteStore` trait with filesystem and in-memory backends
//! - [`server`] - axum HTTP API over a store
//! - [`client`] - `NoteApi` transport trait (HTTP and in-process)
//! - [`session`] - Editor session state machine with debounced saves

pub mod client;
pub mod models;
pub mod server;
pub mod session;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use client::{ApiError, HttpNoteApi, LocalNoteApi, NoteApi};
pub use models::Note;
pub use session::{EditorSession, SessionPhase, ViewMode};
pub use store::{FsNoteStore, MemoryStore, NoteStore, StoreError};
