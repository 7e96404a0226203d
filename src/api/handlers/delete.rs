//! Handler for alias deletion.

use axum::{Json, extract::State};

use crate::api::dto::response::AliasResponse;
use crate::api::extract::AliasParam;
use crate::api::middleware::request_id::RequestId;
use crate::domain::repositories::StorageError;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url/delete/{alias}`, or `DELETE /url/delete?alias=...` (basic auth)
///
/// # Errors
///
/// Reported in the body with HTTP 200:
/// - `Alias not found` - no alias given, or alias is unknown
/// - `Deleting error` - storage failure
#[tracing::instrument(name = "handlers.url.delete", skip_all, fields(request_id = %request_id))]
pub async fn delete_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    AliasParam(alias): AliasParam,
) -> Result<Json<AliasResponse>, AppError> {
    let Some(alias) = alias else {
        tracing::info!("alias is empty");
        return Err(AppError::not_found("Alias not found"));
    };

    state.url_service.remove(&alias).await.map_err(|e| match e {
        StorageError::NotFound => {
            tracing::info!(alias = %alias, "alias not found");
            AppError::not_found("Alias not found")
        }
        other => {
            tracing::error!(error = %other, "failed to delete url");
            AppError::internal("Deleting error")
        }
    })?;

    tracing::info!(alias = %alias, "url deleted");

    Ok(Json(AliasResponse::ok(alias)))
}
