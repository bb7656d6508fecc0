//! Handlers for the `/notes` resource.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use noteful_core::error::{CoreError, Resource};
use noteful_core::notes::{self, NoteInput, NotePatchInput, NoteView};
use noteful_core::types::DbId;
use noteful_db::models::note::Note;
use noteful_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::response::created;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        resource: Resource::Note,
        id,
    })
}

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<Note> {
    NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /notes
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list(&state.pool).await?;
    let views: Vec<NoteView> = notes.into_iter().map(NoteView::from).collect();
    Ok(Json(views))
}

/// POST /notes
///
/// Validates once and inserts once. A `folder_id` that names no folder is
/// refused by the store's foreign key and surfaces as a 500.
pub async fn create_note(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<NoteInput>,
) -> AppResult<impl IntoResponse> {
    let new_note = notes::validate_create(input)?;
    let note = NoteRepo::create(&state.pool, &new_note).await?;

    tracing::info!(note_id = note.id, folder_id = note.folder_id, "Note created");

    Ok(created(&uri, note.id, NoteView::from(note)))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let note = ensure_exists(&state, id).await?;
    Ok(Json(NoteView::from(note)))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !NoteRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /notes/{id}
///
/// Accepts `note_name`, `content` and `date_modified`; `folder_id` is
/// ignored. Existence is checked before the body is validated.
pub async fn update_note(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<NotePatchInput>,
) -> AppResult<impl IntoResponse> {
    ensure_exists(&state, id).await?;
    let patch = notes::validate_update(input)?;

    NoteRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(note_id = id, "Note updated");

    Ok(StatusCode::NO_CONTENT)
}
