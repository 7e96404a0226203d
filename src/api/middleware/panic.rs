//! Panic recovery.
//!
//! A panicking handler is turned into a `500` carrying the usual error
//! envelope; the server keeps serving other requests.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::dto::response::StatusResponse;

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates the panic-catching layer.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StatusResponse::error("Internal error")),
    )
        .into_response()
}
