//! URL mapping creation, resolution and removal.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::utils::alias_generator::{ALIAS_LENGTH, generate_alias};

/// Service sitting between the HTTP handlers and the URL store.
///
/// Fills in a generated alias when the caller supplies none. A generated alias
/// that collides with an existing one is not retried; the conflict is returned
/// to the caller like any other save failure.
#[derive(Clone)]
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Persists `url` under `alias`, generating a 6-character alias when it is
    /// absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasConflict`] if the alias is already taken.
    /// Returns [`StorageError::Failure`] on database errors.
    pub async fn shorten(
        &self,
        url: String,
        alias: Option<String>,
    ) -> Result<UrlMapping, StorageError> {
        let alias = alias
            .filter(|alias| !alias.is_empty())
            .unwrap_or_else(|| generate_alias(ALIAS_LENGTH));

        let new_mapping = NewUrlMapping { alias, url };
        let id = self.repository.save(new_mapping.clone()).await?;

        Ok(new_mapping.into_mapping(id))
    }

    /// Looks up the target URL for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the alias is unknown.
    pub async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        self.repository.get(alias).await
    }

    /// Deletes the mapping for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the alias is unknown.
    pub async fn remove(&self, alias: &str) -> Result<(), StorageError> {
        self.repository.delete(alias).await
    }

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Failure`] on database errors.
    pub async fn count(&self) -> Result<i64, StorageError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    #[tokio::test]
    async fn test_shorten_with_custom_alias() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save()
            .withf(|new_mapping| {
                new_mapping.alias == "my-link" && new_mapping.url == "https://example.com"
            })
            .times(1)
            .returning(|_| Ok(42));

        let service = UrlService::new(Arc::new(mock_repo));

        let mapping = service
            .shorten("https://example.com".to_string(), Some("my-link".to_string()))
            .await
            .unwrap();

        assert_eq!(mapping.id, 42);
        assert_eq!(mapping.alias, "my-link");
        assert_eq!(mapping.url, "https://example.com");
    }

    #[tokio::test]
    async fn test_shorten_generates_alias_when_absent() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save()
            .withf(|new_mapping| {
                new_mapping.alias.len() == ALIAS_LENGTH
                    && new_mapping.alias.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|_| Ok(1));

        let service = UrlService::new(Arc::new(mock_repo));

        let mapping = service
            .shorten("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(mapping.alias.len(), ALIAS_LENGTH);
    }

    #[tokio::test]
    async fn test_shorten_generates_alias_when_empty() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save()
            .withf(|new_mapping| new_mapping.alias.len() == ALIAS_LENGTH)
            .times(1)
            .returning(|_| Ok(1));

        let service = UrlService::new(Arc::new(mock_repo));

        let mapping = service
            .shorten("https://example.com".to_string(), Some(String::new()))
            .await
            .unwrap();

        assert_eq!(mapping.alias.len(), ALIAS_LENGTH);
    }

    #[tokio::test]
    async fn test_shorten_does_not_retry_on_conflict() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(StorageError::AliasConflict));

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com".to_string(), None).await;

        assert!(matches!(result, Err(StorageError::AliasConflict)));
    }

    #[tokio::test]
    async fn test_resolve_passes_through_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_get()
            .withf(|alias| alias == "ghost")
            .times(1)
            .returning(|_| Err(StorageError::NotFound));

        let service = UrlService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.resolve("ghost").await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_remove_success() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_delete()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|_| Ok(()));

        let service = UrlService::new(Arc::new(mock_repo));

        assert!(service.remove("abc123").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_storage_failure() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Err(StorageError::Failure(sqlx::Error::PoolClosed)));

        let service = UrlService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.remove("abc123").await,
            Err(StorageError::Failure(_))
        ));
    }
}
