use std::any::Any;

use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Turn a handler panic into a `500` and log what happened
///
/// Used with `CatchPanicLayer`, so one broken request never takes the
/// listener down.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    tracing::error!(panic = detail, "request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}
