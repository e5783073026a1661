//! Filesystem-backed note store
//!
//! One JSON file per note, `<data_dir>/<id>.json`, containing the full
//! record. Writes go to a uniquely named temp file in the same directory and
//! are renamed into place, so a crashed or concurrent write never leaves a
//! partially written record behind and a single update cannot interleave
//! with itself.

use crate::models::Note;
use crate::store::{NoteStore, StoreError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};
use uuid::Uuid;

/// File-per-note store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FsNoteStore {
    data_dir: PathBuf,
}

/// Ids are used as file names, so only accept the UUID charset. Anything
/// else behaves as an absent record; the id space is opaque to callers
/// and a malformed id can never have been issued by this store.
fn valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl FsNoteStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).await?;
        Ok(Self { data_dir })
    }

    fn note_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }

    /// Serialize and atomically replace the record file for `note`.
    async fn persist(&self, note: &Note) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(note)?;
        let final_path = self.note_path(&note.id);
        let tmp_path = self
            .data_dir
            .join(format!("{}.json.{}.tmp", note.id, Uuid::new_v4()));

        fs::write(&tmp_path, &body).await?;
        if let Err(e) = fs::rename(&tmp_path, &final_path).await {
            // Best effort: don't leave the temp file behind on failure
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn load(&self, id: &str) -> Result<Note, StoreError> {
        if !valid_id(id) {
            return Err(StoreError::not_found(id));
        }
        let raw = match fs::read(self.note_path(id)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::not_found(id));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&raw)?)
    }
}

#[async_trait]
impl NoteStore for FsNoteStore {
    #[instrument(skip(self, content))]
    async fn create(&self, content: String) -> Result<Note, StoreError> {
        let note = Note::new(content);
        self.persist(&note).await?;
        debug!(id = %note.id, "created note");
        Ok(note)
    }

    async fn read(&self, id: &str) -> Result<Note, StoreError> {
        self.load(id).await
    }

    #[instrument(skip(self, content))]
    async fn update(&self, id: &str, content: String) -> Result<Note, StoreError> {
        let mut note = self.load(id).await?;
        note.set_content(content);
        self.persist(&note).await?;
        debug!(id = %note.id, "updated note");
        Ok(note)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        if !valid_id(id) {
            return Err(StoreError::not_found(id));
        }
        match fs::remove_file(self.note_path(id)).await {
            Ok(()) => {
                debug!(id, "deleted note");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}
