#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use noteful_api::config::ServerConfig;
use noteful_api::router::build_app_router;
use noteful_api::state::AppState;
use noteful_core::folders::NewFolder;
use noteful_core::notes::NewNote;
use noteful_core::types::DbId;
use noteful_db::repositories::{FolderRepo, NoteRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the production router (same middleware stack) over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, body)).await
}

/// PATCH with no body and no content type.
pub async fn patch_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// The `{error: {message}}` body every failure uses.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": { "message": message } })
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert folders directly through the repository, returning their ids in
/// order. A fresh test database hands out ids starting at 1.
pub async fn seed_folders(pool: &PgPool, names: &[&str]) -> Vec<DbId> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let folder = FolderRepo::create(
            pool,
            &NewFolder {
                folder_name: name.to_string(),
            },
        )
        .await
        .unwrap();
        ids.push(folder.id);
    }
    ids
}

pub async fn seed_note(pool: &PgPool, note_name: &str, content: &str, folder_id: DbId) -> DbId {
    NoteRepo::create(
        pool,
        &NewNote {
            note_name: note_name.to_string(),
            content: content.to_string(),
            folder_id,
        },
    )
    .await
    .unwrap()
    .id
}
