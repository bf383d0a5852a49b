use std::sync::Arc;

use axum::response::IntoResponse;
use http::{StatusCode, header};
use vox_core::headers::TEXT_PLAIN_UTF_8;

/// Liveness probe reporting how many voices the synthesizer offers
pub async fn health_handler(tts: Arc<tts::Server>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_PLAIN_UTF_8)],
        format!("ok: {} voices\n", tts.voices().len()),
    )
}
