//! Route definitions for folders.
//!
//! Mounted at `/folders` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::folders;
use crate::state::AppState;

/// Folder routes.
///
/// ```text
/// GET    /           -> list_folders
/// POST   /           -> create_folder
/// GET    /{id}       -> get_folder
/// DELETE /{id}       -> delete_folder
/// PATCH  /{id}       -> update_folder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(folders::list_folders).post(folders::create_folder))
        .route(
            "/{id}",
            get(folders::get_folder)
                .delete(folders::delete_folder)
                .patch(folders::update_folder),
        )
}
