mod common;

use alias_shortener::domain::entities::NewUrlMapping;
use alias_shortener::domain::repositories::{StorageError, UrlRepository};
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use tempfile::TempDir;

#[tokio::test]
async fn test_save_then_get() {
    let repo = common::memory_repository().await;

    let id = repo
        .save(NewUrlMapping {
            alias: "ex".to_string(),
            url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

    assert!(id > 0);
    assert_eq!(repo.get("ex").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_ids_are_increasing() {
    let repo = common::memory_repository().await;

    let first = common::create_test_mapping(&repo, "a", "https://a.example.com").await;
    let second = common::create_test_mapping(&repo, "b", "https://b.example.com").await;

    assert!(second > first);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let repo = common::memory_repository().await;

    let first = common::create_test_mapping(&repo, "a", "https://a.example.com").await;
    repo.delete("a").await.unwrap();
    let second = common::create_test_mapping(&repo, "a", "https://a.example.com").await;

    assert!(second > first);
}

#[tokio::test]
async fn test_duplicate_alias_conflict() {
    let repo = common::memory_repository().await;
    common::create_test_mapping(&repo, "dup", "https://first.example.com").await;

    let result = repo
        .save(NewUrlMapping {
            alias: "dup".to_string(),
            url: "https://second.example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(StorageError::AliasConflict)));
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.get("dup").await.unwrap(), "https://first.example.com");
}

#[tokio::test]
async fn test_get_unknown_alias() {
    let repo = common::memory_repository().await;

    let result = repo.get("missing").await;

    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_get_is_exact_match() {
    let repo = common::memory_repository().await;
    common::create_test_mapping(&repo, "Abc", "https://example.com").await;

    assert!(matches!(repo.get("abc").await, Err(StorageError::NotFound)));
    assert!(matches!(repo.get("Ab").await, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_delete_unknown_alias() {
    let repo = common::memory_repository().await;

    let result = repo.delete("ghost").await;

    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_delete_then_get() {
    let repo = common::memory_repository().await;
    common::create_test_mapping(&repo, "gone", "https://example.com").await;

    repo.delete("gone").await.unwrap();

    assert!(matches!(repo.get("gone").await, Err(StorageError::NotFound)));
    assert!(matches!(repo.delete("gone").await, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_count() {
    let repo = common::memory_repository().await;
    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_mapping(&repo, "a", "https://a.example.com").await;
    common::create_test_mapping(&repo, "b", "https://b.example.com").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_closed_pool_reports_failure() {
    let repo = common::memory_repository().await;
    repo.pool().close().await;

    assert!(matches!(
        repo.get("any").await,
        Err(StorageError::Failure(_))
    ));
    assert!(matches!(
        repo.delete("any").await,
        Err(StorageError::Failure(_))
    ));
    assert!(matches!(
        repo.save(NewUrlMapping {
            alias: "any".to_string(),
            url: "https://example.com".to_string(),
        })
        .await,
        Err(StorageError::Failure(_))
    ));
}

#[tokio::test]
async fn test_reopen_file_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.db");
    let path = path.to_str().unwrap();

    let repo = SqliteUrlRepository::connect(path).await.unwrap();
    common::create_test_mapping(&repo, "keep", "https://example.com").await;
    repo.pool().close().await;

    let reopened = SqliteUrlRepository::connect(path).await.unwrap();

    assert_eq!(reopened.get("keep").await.unwrap(), "https://example.com");
    assert_eq!(reopened.count().await.unwrap(), 1);

    let indexes: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_alias'",
    )
    .fetch_one(reopened.pool())
    .await
    .unwrap();
    assert_eq!(indexes, 1);
}

#[tokio::test]
async fn test_schema_created() {
    let repo = common::memory_repository().await;

    let tables: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'url'",
    )
    .fetch_one(repo.pool())
    .await
    .unwrap();
    let indexes: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_alias'",
    )
    .fetch_one(repo.pool())
    .await
    .unwrap();

    assert_eq!(tables, 1);
    assert_eq!(indexes, 1);
}
