//! Note persistence layer
//!
//! Defines the [`NoteStore`] trait that abstracts durable CRUD for note
//! records, plus two backends: [`FsNoteStore`] (one JSON file per note,
//! the production layout) and [`MemoryStore`] (for tests and in-process
//! embedding). Storage is a flat keyed space: every access is by exact id,
//! and no enumeration or query operation exists.

mod error;
mod fs_store;
mod memory_store;
mod note_store;

pub use error::StoreError;
pub use fs_store::FsNoteStore;
pub use memory_store::MemoryStore;
pub use note_store::NoteStore;
