//! Handler for alias redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::api::extract::AliasParam;
use crate::api::middleware::request_id::RequestId;
use crate::domain::repositories::StorageError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`, or `GET /?alias=...`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// Reported in the body with HTTP 200:
/// - `Alias not found` - no alias in path or query
/// - `URL not found` - alias is unknown
/// - `Internal error` - storage failure
#[tracing::instrument(name = "handlers.url.redirect", skip_all, fields(request_id = %request_id))]
pub async fn redirect_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    AliasParam(alias): AliasParam,
) -> Result<impl IntoResponse, AppError> {
    let Some(alias) = alias else {
        tracing::info!("alias is empty");
        return Err(AppError::not_found("Alias not found"));
    };

    let url = state.url_service.resolve(&alias).await.map_err(|e| match e {
        StorageError::NotFound => {
            tracing::info!(alias = %alias, "url not found");
            AppError::not_found("URL not found")
        }
        other => {
            tracing::error!(error = %other, "failed to get url");
            AppError::internal("Internal error")
        }
    })?;

    let location = HeaderValue::from_str(&url).map_err(|e| {
        tracing::error!(error = %e, "stored url is not a valid header value");
        AppError::internal("Internal error")
    })?;

    tracing::info!(alias = %alias, url = %url, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
