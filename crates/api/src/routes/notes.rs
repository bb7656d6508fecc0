//! Route definitions for notes.
//!
//! Mounted at `/notes` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /           -> list_notes
/// POST   /           -> create_note
/// GET    /{id}       -> get_note
/// DELETE /{id}       -> delete_note
/// PATCH  /{id}       -> update_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/{id}",
            get(notes::get_note)
                .delete(notes::delete_note)
                .patch(notes::update_note),
        )
}
