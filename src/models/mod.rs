//! Data structures for notelite

mod note;

pub use note::Note;
