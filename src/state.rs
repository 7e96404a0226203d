//! Shared application state.

use std::sync::Arc;

use crate::api::middleware::auth::Credentials;
use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// State injected into every handler and the auth middleware.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub credentials: Credentials,
}

impl AppState {
    pub fn new(repository: Arc<dyn UrlRepository>, credentials: Credentials) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository)),
            credentials,
        }
    }
}
