//! Note CRUD endpoints
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check
//! - `POST /api/notes` - Create a new note
//! - `GET /api/notes/:id` - Get a note by ID
//! - `PUT /api/notes/:id` - Replace a note's content
//! - `DELETE /api/notes/:id` - Delete a note
//!
//! Every note endpoint returns the full record on success; the id in the
//! path is the only addressing mechanism (and the only credential: anyone
//! holding a note's id can read and write it).

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::models::Note;
use crate::server::{AppState, HttpError};
use crate::store::StoreError;

/// Body for create and update requests.
///
/// `content` is optional on create (defaults to empty) and required on
/// update; a missing update body field also means empty, matching full
/// replacement semantics.
#[derive(Debug, Deserialize)]
pub struct NoteContentInput {
    #[serde(default)]
    pub content: String,
}

/// Acknowledgement returned by delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
///
/// ```bash
/// curl http://localhost:3000/api/health
/// ```
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create a new note, returning the full record with its generated id.
pub async fn create_note(
    State(state): State<AppState>,
    Json(input): Json<NoteContentInput>,
) -> Result<Json<Note>, HttpError> {
    let note = state.store.create(input.content).await.map_err(log_store)?;
    info!(id = %note.id, "note created");
    Ok(Json(note))
}

/// Get a note by id.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, HttpError> {
    let note = state.store.read(&id).await.map_err(log_store)?;
    Ok(Json(note))
}

/// Replace the note's content wholesale and return the updated record.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<NoteContentInput>,
) -> Result<Json<Note>, HttpError> {
    let note = state
        .store
        .update(&id, input.content)
        .await
        .map_err(log_store)?;
    Ok(Json(note))
}

/// Delete a note permanently.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    state.store.delete(&id).await.map_err(log_store)?;
    info!(id = %id, "note deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: "Note deleted".to_string(),
    }))
}

/// Log storage failures before mapping to the wire error; absence is an
/// ordinary outcome and stays quiet.
fn log_store(err: StoreError) -> HttpError {
    if !err.is_not_found() {
        error!(error = %err, "store operation failed");
    }
    err.into()
}
