//! Editor session state machine
//!
//! One [`EditorSession`] owns the in-memory editing state for exactly one
//! note at a time and translates user actions into [`NoteApi`] calls. Rapid
//! keystrokes are collapsed by a debounce timer into a single deferred save;
//! the save is fire-and-forget, so typing is never blocked by network
//! activity and a save response never overwrites local content.
//!
//! The session is a cheap-clone handle over shared inner state rather than a
//! global, so tests can run any number of independent sessions.
//!
//! # Lifecycle
//!
//! ```text
//! start(id present) -> Loading -> Ready
//!                         |  (absent / failed)
//! start(id absent) ----> Creating -> Ready
//!                           | (create failed)
//!                         Failed
//! delete: Ready -> Deleting -> Creating -> Ready
//! ```

use crate::client::{ApiError, NoteApi};
use crate::utils::render_markdown;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Debounce delay between the last keystroke and the save request.
pub const SAVE_DEBOUNCE: Duration = Duration::from_secs(1);
/// How long transient status messages linger before reverting to "Ready".
pub const STATUS_LINGER: Duration = Duration::from_secs(3);

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Fetching an existing note referenced by the location
    Loading,
    /// Requesting a fresh note from the store
    Creating,
    /// Local content is user-editable
    Ready,
    /// Deletion request in flight
    Deleting,
    /// Create failed; no current note id, so edits cannot be saved
    Failed,
}

/// How the note is presented. Orthogonal to the lifecycle phase; both modes
/// show the same underlying text and switching discards nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Raw,
    Rendered,
}

#[derive(Debug)]
struct SessionInner {
    phase: SessionPhase,
    note_id: Option<String>,
    content: String,
    view: ViewMode,
    preview_html: String,
    status: String,
    /// Bumped per status change; a revert task only fires if unchanged
    status_epoch: u64,
    /// Bumped per edit; a save response only reports "Saved" if unchanged
    edit_epoch: u64,
    /// The `note` query parameter recorded in the page location
    location_note_param: Option<String>,
    pending_save: Option<JoinHandle<()>>,
}

/// Client editing context for a single note.
#[derive(Clone)]
pub struct EditorSession {
    api: Arc<dyn NoteApi>,
    inner: Arc<Mutex<SessionInner>>,
    debounce: Duration,
    status_linger: Duration,
}

impl EditorSession {
    /// Start a session, resolving the current note before returning.
    ///
    /// `location_id` is the `note` query parameter from the page location,
    /// if any. Present: load that note, falling back to a fresh one if it
    /// no longer exists or the load fails. Absent: create a fresh note.
    /// Either way the session is usable (or `Failed`) once this returns.
    pub async fn start(api: Arc<dyn NoteApi>, location_id: Option<String>) -> Self {
        Self::start_with_timings(api, location_id, SAVE_DEBOUNCE, STATUS_LINGER).await
    }

    /// [`start`](Self::start) with configurable debounce and status timings.
    pub async fn start_with_timings(
        api: Arc<dyn NoteApi>,
        location_id: Option<String>,
        debounce: Duration,
        status_linger: Duration,
    ) -> Self {
        let session = Self {
            api,
            inner: Arc::new(Mutex::new(SessionInner {
                phase: SessionPhase::Loading,
                note_id: None,
                content: String::new(),
                view: ViewMode::Raw,
                preview_html: String::new(),
                status: "Ready".to_string(),
                status_epoch: 0,
                edit_epoch: 0,
                location_note_param: location_id.clone(),
                pending_save: None,
            })),
            debounce,
            status_linger,
        };

        match location_id {
            Some(id) => session.load(&id).await,
            None => session.create_new().await,
        }
        session
    }

    /// Load an existing note by id, falling back to a fresh note when it is
    /// absent or the request fails.
    async fn load(&self, id: &str) {
        self.transition(SessionPhase::Loading, "Loading note...", false);

        match self.api.read(id).await {
            Ok(note) => {
                let mut inner = self.lock();
                inner.phase = SessionPhase::Ready;
                inner.note_id = Some(note.id.clone());
                inner.content = note.content;
                inner.location_note_param = Some(note.id);
                inner.refresh_preview();
                drop(inner);
                self.set_status("Note loaded", true);
            }
            Err(ApiError::NotFound { .. }) => {
                debug!(id, "note missing, falling back to a fresh one");
                self.set_status("Note not found, creating new note...", true);
                self.create_new().await;
            }
            Err(err) => {
                warn!(id, error = %err, "failed to load note");
                self.set_status("Error loading note", true);
                self.create_new().await;
            }
        }
    }

    /// Request a fresh empty note and adopt it as the current one.
    ///
    /// Also used by the "new note" user action. On failure the session ends
    /// in `Failed`: there is no current id, so nothing can be saved and no
    /// automatic retry happens.
    pub async fn create_new(&self) {
        self.transition(SessionPhase::Creating, "Creating new note...", false);

        match self.api.create(String::new()).await {
            Ok(note) => {
                let mut inner = self.lock();
                inner.phase = SessionPhase::Ready;
                inner.note_id = Some(note.id.clone());
                inner.content.clear();
                inner.location_note_param = Some(note.id);
                inner.refresh_preview();
                drop(inner);
                self.set_status("New note created", true);
            }
            Err(err) => {
                warn!(error = %err, "failed to create note");
                let mut inner = self.lock();
                inner.phase = SessionPhase::Failed;
                inner.note_id = None;
                drop(inner);
                self.set_status("Error creating note", true);
            }
        }
    }

    /// Apply one edit: replace local content immediately and (re)start the
    /// debounce timer. Never blocks on the network.
    ///
    /// The pending timer is cancelled and replaced, but a save already in
    /// flight is left alone. If it races a later save, the store's
    /// last-write-wins rule decides, and local content is unaffected either
    /// way.
    pub fn handle_edit(&self, text: impl Into<String>) {
        let (id, epoch) = {
            let mut inner = self.lock();
            inner.content = text.into();
            inner.edit_epoch += 1;
            inner.refresh_preview();
            if let Some(pending) = inner.pending_save.take() {
                pending.abort();
            }
            (inner.note_id.clone(), inner.edit_epoch)
        };

        // Without an id there is nothing to address a save at.
        let Some(id) = id else {
            return;
        };
        self.set_status("Saving...", false);

        let session = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(session.debounce).await;
            // Detach the save so cancelling this timer (on the next edit)
            // can never abort a request already in flight.
            tokio::spawn(async move {
                session.save(&id, epoch).await;
            });
        });
        self.lock().pending_save = Some(handle);
    }

    /// Push the current local content to the store. Fire-and-forget: the
    /// response only updates the status line, never the text.
    async fn save(&self, id: &str, epoch: u64) {
        let content = self.lock().content.clone();
        match self.api.update(id, content).await {
            Ok(_) => {
                // A newer edit owns the status line by now.
                if self.lock().edit_epoch == epoch {
                    self.set_status("Saved", true);
                }
            }
            Err(err) => {
                warn!(id, error = %err, "failed to save note");
                self.set_status("Error saving", true);
            }
        }
    }

    /// Delete the current note. On success the session moves straight to a
    /// fresh note; it always ends with an active note, never without one.
    pub async fn delete(&self) {
        let id = {
            let mut inner = self.lock();
            let Some(id) = inner.note_id.clone() else {
                return;
            };
            if let Some(pending) = inner.pending_save.take() {
                pending.abort();
            }
            inner.phase = SessionPhase::Deleting;
            id
        };
        self.set_status("Deleting note...", false);

        match self.api.delete(&id).await {
            Ok(()) => {
                self.set_status("Note deleted", true);
                self.create_new().await;
            }
            Err(err) => {
                warn!(id, error = %err, "failed to delete note");
                // The note may or may not still exist; stay on it.
                self.lock().phase = SessionPhase::Ready;
                self.set_status("Error deleting note", true);
            }
        }
    }

    /// Switch between raw text and rendered preview. Switching to rendered
    /// re-renders from current local content; nothing is re-fetched.
    pub fn set_view(&self, view: ViewMode) {
        let mut inner = self.lock();
        inner.view = view;
        inner.refresh_preview();
    }

    /// Shareable URL for the current note: the id embedded as a query
    /// parameter on the base page URL. The id is the only credential:
    /// anyone with the link gets the same read/write access.
    pub fn share_link(&self, base_url: &str) -> Option<String> {
        let inner = self.lock();
        inner
            .note_id
            .as_ref()
            .map(|id| format!("{}?note={id}", base_url.trim_end_matches('/')))
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock().phase
    }

    pub fn note_id(&self) -> Option<String> {
        self.lock().note_id.clone()
    }

    /// The user's latest local text, the source of truth for the editor,
    /// independent of save success.
    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    pub fn view(&self) -> ViewMode {
        self.lock().view
    }

    /// Rendered preview HTML; empty while in raw mode.
    pub fn preview_html(&self) -> String {
        self.lock().preview_html.clone()
    }

    pub fn status(&self) -> String {
        self.lock().status.clone()
    }

    /// The `note` query parameter the session has recorded in the location,
    /// so a reload resolves back to the same note.
    pub fn location_note_param(&self) -> Option<String> {
        self.lock().location_note_param.clone()
    }

    fn transition(&self, phase: SessionPhase, status: &str, transient: bool) {
        self.lock().phase = phase;
        self.set_status(status, transient);
    }

    /// Set the status line. Transient messages revert to "Ready" after the
    /// linger delay unless a newer status supersedes them first.
    fn set_status(&self, status: &str, transient: bool) {
        let epoch = {
            let mut inner = self.lock();
            inner.status = status.to_string();
            inner.status_epoch += 1;
            inner.status_epoch
        };

        if transient {
            let session = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(session.status_linger).await;
                let mut inner = session.lock();
                if inner.status_epoch == epoch {
                    inner.status = "Ready".to_string();
                }
            });
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        // Inner lock is never held across an await and no holder panics.
        self.inner.lock().expect("session state lock poisoned")
    }
}

impl SessionInner {
    fn refresh_preview(&mut self) {
        if self.view == ViewMode::Rendered {
            self.preview_html = render_markdown(&self.content);
        } else {
            self.preview_html.clear();
        }
    }
}
