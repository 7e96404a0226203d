mod common;

use alias_shortener::api::handlers::delete_handler;
use alias_shortener::domain::repositories::{StorageError, UrlRepository};
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use axum::{Router, routing::delete};
use axum_test::TestServer;
use serde_json::json;

async fn setup() -> (TestServer, SqliteUrlRepository) {
    let repo = common::memory_repository().await;
    let state = common::create_test_state(repo.clone());
    let app = Router::new()
        .route("/url/delete/{alias}", delete(delete_handler))
        .route("/url/delete", delete(delete_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_delete_success() {
    let (server, repo) = setup().await;
    common::create_test_mapping(&repo, "ex", "https://example.com").await;

    let response = server.delete("/url/delete/ex").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK", "alias": "ex" }));
    assert!(matches!(repo.get("ex").await, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_delete_alias_from_query() {
    let (server, repo) = setup().await;
    common::create_test_mapping(&repo, "ex", "https://example.com").await;

    let response = server
        .delete("/url/delete")
        .add_query_param("alias", "ex")
        .await;

    response.assert_json(&json!({ "status": "OK", "alias": "ex" }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_unknown_alias() {
    let (server, _repo) = setup().await;

    let response = server.delete("/url/delete/ghost").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "Alias not found" }));
}

#[tokio::test]
async fn test_delete_without_alias() {
    let (server, _repo) = setup().await;

    let response = server.delete("/url/delete").await;

    response.assert_json(&json!({ "status": "Error", "error": "Alias not found" }));
}

#[tokio::test]
async fn test_delete_storage_failure() {
    let (server, repo) = setup().await;
    repo.pool().close().await;

    let response = server.delete("/url/delete/ex").await;

    response.assert_json(&json!({ "status": "Error", "error": "Deleting error" }));
}
