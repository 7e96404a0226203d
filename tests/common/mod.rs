#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use alias_shortener::api::middleware::auth::Credentials;
use alias_shortener::config::HttpServerConfig;
use alias_shortener::domain::entities::NewUrlMapping;
use alias_shortener::domain::repositories::{StorageError, UrlRepository};
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use alias_shortener::state::AppState;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// Single-connection in-memory database; every connection would otherwise get its own.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn memory_repository() -> SqliteUrlRepository {
    SqliteUrlRepository::new(memory_pool().await).await.unwrap()
}

pub async fn create_test_mapping(repo: &SqliteUrlRepository, alias: &str, url: &str) -> i64 {
    repo.save(NewUrlMapping {
        alias: alias.to_string(),
        url: url.to_string(),
    })
    .await
    .unwrap()
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_USER, TEST_PASSWORD)
}

pub fn create_test_state(repo: SqliteUrlRepository) -> AppState {
    AppState::new(Arc::new(repo), test_credentials())
}

pub fn test_http_config() -> HttpServerConfig {
    HttpServerConfig {
        address: "127.0.0.1:0".to_string(),
        timeout: Duration::from_secs(4),
        idle_timeout: Duration::from_secs(60),
        user: TEST_USER.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

pub fn valid_auth() -> String {
    basic_auth(TEST_USER, TEST_PASSWORD)
}

/// Repository whose every call panics.
pub struct PanickingRepository;

#[async_trait]
impl UrlRepository for PanickingRepository {
    async fn save(&self, _new_mapping: NewUrlMapping) -> Result<i64, StorageError> {
        panic!("save exploded")
    }

    async fn get(&self, _alias: &str) -> Result<String, StorageError> {
        panic!("get exploded")
    }

    async fn delete(&self, _alias: &str) -> Result<(), StorageError> {
        panic!("delete exploded")
    }

    async fn count(&self) -> Result<i64, StorageError> {
        panic!("count exploded")
    }
}
