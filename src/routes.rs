//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`                - Save a URL (basic auth)
//! - `DELETE /url/delete/{alias}` - Delete an alias (basic auth)
//! - `DELETE /url/delete`         - Delete, alias from `?alias=` (basic auth)
//! - `GET    /{alias}`            - Redirect (public)
//! - `GET    /`                   - Redirect, alias from `?alias=` (public)
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Path normalization** - Trailing slash trimming and `.json` suffix stripping, before routing
//! - **Request id** - Assigned or propagated, echoed in `x-request-id`
//! - **Tracing** - Access log span carrying the request id
//! - **Panic recovery** - `500` with the error envelope
//! - **Timeouts** - Request body read and response production
//! - **Authentication** - Basic auth, route layer on mutating routes only

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower::util::{MapRequest, MapRequestLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};

use crate::api::handlers::{delete_handler, redirect_handler, save_handler};
use crate::api::middleware::normalize::{StripFormat, strip_format_suffix};
use crate::api::middleware::{auth, panic, request_id, tracing};
use crate::config::HttpServerConfig;
use crate::state::AppState;

/// Fully layered application service.
pub type App = NormalizePath<MapRequest<Router, StripFormat>>;

/// Routes that mutate the store, protected by basic auth. Request bodies are
/// not size-limited.
fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/delete/{alias}", delete(delete_handler))
        .route("/url/delete", delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(DefaultBodyLimit::disable())
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/", get(redirect_handler))
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `http` - timeouts are taken from here
pub fn app_router(state: AppState, http: &HttpServerConfig) -> App {
    let router = Router::new()
        .merge(protected_routes(&state))
        .merge(public_routes())
        .with_state(state)
        .layer(RequestBodyTimeoutLayer::new(http.timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.timeout,
        ))
        .layer(panic::layer())
        .layer(tracing::layer())
        .layer(middleware::from_fn(request_id::layer));

    let router = MapRequestLayer::new(strip_format_suffix as StripFormat).layer(router);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
