//! Handlers for the `/folders` resource.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use noteful_core::error::{CoreError, Resource};
use noteful_core::folders::{self, FolderInput, FolderView};
use noteful_core::types::DbId;
use noteful_db::models::folder::Folder;
use noteful_db::repositories::FolderRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::response::created;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        resource: Resource::Folder,
        id,
    })
}

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<Folder> {
    FolderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /folders
pub async fn list_folders(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let folders = FolderRepo::list(&state.pool).await?;
    let views: Vec<FolderView> = folders.into_iter().map(FolderView::from).collect();
    Ok(Json(views))
}

/// POST /folders
///
/// Responds 201 with a `Location` header and the created folder.
pub async fn create_folder(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<FolderInput>,
) -> AppResult<impl IntoResponse> {
    let new_folder = folders::validate_create(input)?;
    let folder = FolderRepo::create(&state.pool, &new_folder).await?;

    tracing::info!(folder_id = folder.id, "Folder created");

    Ok(created(&uri, folder.id, FolderView::from(folder)))
}

/// GET /folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let folder = ensure_exists(&state, id).await?;
    Ok(Json(FolderView::from(folder)))
}

/// DELETE /folders/{id}
///
/// Notes inside the folder are removed by the store's cascade.
pub async fn delete_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !FolderRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(folder_id = id, "Folder deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /folders/{id}
///
/// The id is checked before the body, so a missing folder is a 404 even when
/// the body is empty.
pub async fn update_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<FolderInput>,
) -> AppResult<impl IntoResponse> {
    ensure_exists(&state, id).await?;
    let patch = folders::validate_update(input)?;

    FolderRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(folder_id = id, "Folder updated");

    Ok(StatusCode::NO_CONTENT)
}
