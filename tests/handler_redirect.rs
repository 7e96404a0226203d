mod common;

use alias_shortener::api::handlers::redirect_handler;
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;

async fn setup() -> (TestServer, SqliteUrlRepository) {
    let repo = common::memory_repository().await;
    let state = common::create_test_state(repo.clone());
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = setup().await;
    common::create_test_mapping(&repo, "ex", "https://example.com/target").await;

    let response = server.get("/ex").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_alias_from_query() {
    let (server, repo) = setup().await;
    common::create_test_mapping(&repo, "ex", "https://example.com").await;

    let response = server.get("/").add_query_param("alias", "ex").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_without_alias() {
    let (server, _repo) = setup().await;

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "Alias not found" }));
}

#[tokio::test]
async fn test_redirect_empty_query_alias() {
    let (server, _repo) = setup().await;

    let response = server.get("/").add_query_param("alias", "").await;

    response.assert_json(&json!({ "status": "Error", "error": "Alias not found" }));
}

#[tokio::test]
async fn test_redirect_unknown_alias() {
    let (server, _repo) = setup().await;

    let response = server.get("/missing-alias").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "URL not found" }));
}

#[tokio::test]
async fn test_redirect_storage_failure() {
    let (server, repo) = setup().await;
    repo.pool().close().await;

    let response = server.get("/ex").await;

    response.assert_json(&json!({ "status": "Error", "error": "Internal error" }));
}
