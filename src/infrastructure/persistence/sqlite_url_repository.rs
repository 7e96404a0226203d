//! SQLite implementation of the URL repository.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::{StorageError, UrlRepository};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL
    )
"#;

const CREATE_ALIAS_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// SQLite repository for URL mappings.
///
/// Every operation is a single statement; uniqueness and read/delete
/// consistency come from SQLite itself.
#[derive(Clone)]
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Opens (or creates) the database file at `storage_path` and prepares the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot be created.
    pub async fn connect(storage_path: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(storage_path)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::new(pool).await
    }

    /// Wraps an existing pool, creating the schema if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Failure`] if the schema statements fail.
    pub async fn new(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        sqlx::query(CREATE_ALIAS_INDEX).execute(&pool).await?;

        tracing::debug!("storage schema ready");

        Ok(Self { pool })
    }

    /// Underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(&new_mapping.url)
            .bind(&new_mapping.alias)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_insert_error(e: sqlx::Error) -> StorageError {
    if e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return StorageError::AliasConflict;
    }

    StorageError::Failure(e)
}
