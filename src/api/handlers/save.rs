//! Handler for storing a URL under an alias.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use validator::Validate;

use crate::api::dto::response::AliasResponse;
use crate::api::dto::save::SaveRequest;
use crate::api::middleware::request_id::RequestId;
use crate::domain::repositories::StorageError;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under the given alias, or under a generated one.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex" }
/// ```
///
/// The body is decoded as JSON regardless of `Content-Type`. An absent or
/// empty `alias` gets a random 6-character alias.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// ```
///
/// # Errors
///
/// Every failure is reported in the body with HTTP 200:
/// - `failed to decode request` - body is not valid JSON for this shape
/// - `field URL is a required field` / `field URL is a bad url` - validation
/// - `url already exists` - alias is taken
/// - `failed to save url` - storage failure
#[tracing::instrument(name = "handlers.url.save", skip_all, fields(request_id = %request_id))]
pub async fn save_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AliasResponse>, AppError> {
    let body = body.map_err(|e| {
        tracing::error!(error = %e, "failed to read request body");
        AppError::Decode
    })?;

    let payload: SaveRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "failed to decode request body");
        AppError::Decode
    })?;

    tracing::info!(url = ?payload.url, alias = ?payload.alias, "request body decoded");

    if let Err(errors) = payload.validate() {
        tracing::error!(error = %errors, "invalid request");
        return Err(errors.into());
    }

    let SaveRequest { url, alias } = payload;
    let url = url.unwrap_or_default();

    let mapping = state
        .url_service
        .shorten(url, alias)
        .await
        .map_err(|e| match e {
            StorageError::AliasConflict => {
                tracing::info!("url already exists");
                AppError::conflict("url already exists")
            }
            other => {
                tracing::error!(error = %other, "failed to add url");
                AppError::internal("failed to save url")
            }
        })?;

    tracing::info!(id = mapping.id, alias = %mapping.alias, "url added");

    Ok(Json(AliasResponse::ok(mapping.alias)))
}
