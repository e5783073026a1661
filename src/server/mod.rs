//! HTTP API over a note store
//!
//! Exposes the note CRUD operations as a small REST-style API. The router is
//! built over shared [`AppState`] so tests can drive it directly with
//! `tower::ServiceExt::oneshot` against any [`NoteStore`] backend.
//!
//! # Security
//!
//! There is no authentication: the note id is the only credential, and
//! anyone holding it has full read/write access. CORS is wide open since
//! the API carries no cookies or ambient credentials.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::NoteStore;

mod http_error;
mod note_endpoints;

pub use http_error::HttpError;
pub use note_endpoints::{DeleteResponse, HealthStatus, NoteContentInput};

/// Application state shared across all endpoints.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NoteStore>,
}

/// Build the API router over the given store.
pub fn build_router(store: Arc<dyn NoteStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/api/health", get(note_endpoints::health_check))
        .route("/api/notes", post(note_endpoints::create_note))
        .route("/api/notes/:id", get(note_endpoints::get_note))
        .route("/api/notes/:id", put(note_endpoints::update_note))
        .route("/api/notes/:id", delete(note_endpoints::delete_note))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
