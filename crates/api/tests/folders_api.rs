//! HTTP-level integration tests for the `/api/folders` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{
    body_bytes, body_json, delete, error_body, get, patch_empty, patch_json, post_json,
    seed_folders, seed_note,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /api/folders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_no_folders_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/folders").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_all_folders_in_insertion_order(pool: PgPool) {
    seed_folders(&pool, &["Important", "Super", "Spangley"]).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/folders").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {"id": 1, "folder_name": "Important"},
            {"id": 2, "folder_name": "Super"},
            {"id": 3, "folder_name": "Spangley"},
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_sanitizes_folder_names(pool: PgPool) {
    seed_folders(&pool, &[r#"Naughty <script>alert("xss");</script>"#]).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/folders").await).await;

    assert_eq!(
        json[0]["folder_name"],
        r#"Naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
    );
}

// ---------------------------------------------------------------------------
// GET /api/folders/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_folder_returns_404(pool: PgPool) {
    for id in [2000, 0, -1] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/folders/{id}")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, error_body("Folder does not exist"));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_existing_folder_returns_it(pool: PgPool) {
    seed_folders(&pool, &["A", "B"]).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/folders/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 2, "folder_name": "B"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_with_non_numeric_id_returns_400_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/folders/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]["message"].is_string());
}

// ---------------------------------------------------------------------------
// POST /api/folders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_location_and_body(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/folders", json!({"folder_name": "New Folder"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers().get(LOCATION).unwrap().to_str().unwrap().to_string();
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    assert_eq!(created["folder_name"], "New Folder");
    assert_eq!(location, format!("/api/folders/{id}"));

    // The created folder can be fetched back unchanged.
    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &location).await).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_sanitizes_response_but_stores_raw_text(pool: PgPool) {
    let raw = r#"Bad <img src="x" onerror="alert(1)">"#;
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/folders", json!({"folder_name": raw})).await).await;

    assert_eq!(
        created["folder_name"],
        r#"Bad &lt;img src="x" onerror="alert(1)"&gt;"#
    );

    let stored: String = sqlx::query_scalar("SELECT folder_name FROM folders WHERE id = $1")
        .bind(created["id"].as_i64().unwrap())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, raw);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_name_returns_400_and_creates_nothing(pool: PgPool) {
    let bodies = [
        json!({}),
        json!({"folder_name": ""}),
        json!({"folder_name": null}),
        json!({"name": ""}),
    ];

    for body in bodies {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/folders", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, error_body("Missing folder name"));
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_malformed_json_returns_400(pool: PgPool) {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/folders")
        .header("content-type", "application/json")
        .body(Body::from("{\"folder_name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON body"));
}

// ---------------------------------------------------------------------------
// DELETE /api/folders/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_folder_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/folders/2000").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, error_body("Folder does not exist"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_folder_from_collection(pool: PgPool) {
    seed_folders(&pool, &["A", "B", "C"]).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/folders/2").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/folders").await).await;
    assert_eq!(
        json,
        json!([
            {"id": 1, "folder_name": "A"},
            {"id": 3, "folder_name": "C"},
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_to_notes_in_folder(pool: PgPool) {
    let ids = seed_folders(&pool, &["A", "B"]).await;
    seed_note(&pool, "in A", "x", ids[0]).await;
    seed_note(&pool, "in B", "y", ids[1]).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/folders/{}", ids[0])).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let notes = body_json(get(app, "/api/notes").await).await;
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["note_name"], "in B");
}

// ---------------------------------------------------------------------------
// PATCH /api/folders/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_missing_folder_returns_404_even_without_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_empty(app, "/api/folders/2000").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, error_body("Folder does not exist"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_updates_folder_name(pool: PgPool) {
    seed_folders(&pool, &["A", "B"]).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/api/folders/2",
        json!({"folder_name": "New Folder Name"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/folders/2").await).await;
    assert_eq!(json, json!({"id": 2, "folder_name": "New Folder Name"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_with_only_falsy_fields_returns_400_and_leaves_row(pool: PgPool) {
    seed_folders(&pool, &["A", "B"]).await;

    for body in [json!({"name": ""}), json!({"folder_name": ""}), json!({})] {
        let app = common::build_test_app(pool.clone());
        let response = patch_json(app, "/api/folders/2", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            error_body("Request body must contain a valid folder name")
        );
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/folders/2").await).await;
    assert_eq!(json["folder_name"], "B");
}
