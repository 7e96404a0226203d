//! Repository trait for alias → URL storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::NewUrlMapping;

/// Outcome of a failed store operation.
///
/// Callers match on the variant; `NotFound` and `AliasConflict` are expected
/// business outcomes, `Failure` is anything the persistence engine reported.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("alias does not exist")]
    NotFound,

    #[error("alias already exists")]
    AliasConflict,

    #[error("storage failure: {0}")]
    Failure(#[from] sqlx::Error),
}

/// Repository interface for URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasConflict`] if the alias is already taken.
    /// Returns [`StorageError::Failure`] on any other database error.
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<i64, StorageError>;

    /// Returns the URL stored for an exact alias match.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists for the alias.
    /// Returns [`StorageError::Failure`] on database errors.
    async fn get(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping for an exact alias match.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no row was affected.
    /// Returns [`StorageError::Failure`] on database errors.
    async fn delete(&self, alias: &str) -> Result<(), StorageError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Failure`] on database errors.
    async fn count(&self) -> Result<i64, StorageError>;
}
