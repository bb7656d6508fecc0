//! Shared response helpers for API handlers.

use axum::http::header::LOCATION;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use noteful_core::types::DbId;
use serde::Serialize;

/// Build the `Location` value for a newly created member of the collection
/// addressed by `collection`.
///
/// Uses the path the client actually requested, so the header stays correct
/// wherever the router is nested.
pub fn member_location(collection: &Uri, id: DbId) -> String {
    format!("{}/{id}", collection.path().trim_end_matches('/'))
}

/// `201 Created` with a `Location` header pointing at the new resource and the
/// serialized resource as the body.
pub fn created<T: Serialize>(collection: &Uri, id: DbId, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(LOCATION, member_location(collection, id))],
        Json(body),
    )
        .into_response()
}
