#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod bill;
mod error;
pub mod format;
mod request;
mod server;
mod synthesizer;
#[cfg(all(test, unix))]
mod test_support;
mod types;
mod voices;

use std::sync::Arc;

use axum::{
    Router,
    extract::{FromRequest, Request, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::{Method, StatusCode, header};
use vox_core::headers::TEXT_PLAIN_UTF_8;

pub use bill::is_oh_bill;
pub use error::{Result, SynthesisError, TtsError};
pub use format::{AudioFormat, validate};
pub use request::ExtractSynthesis;
pub use server::{Server, TtsServerBuilder};
pub use synthesizer::Synthesizer;
pub use types::{SynthesisRequest, SynthesizedAudio};
pub use voices::VoiceSet;

/// Build the speech server from configuration
///
/// Runs the synthesizer's voice query; any failure here should stop the
/// process from starting.
pub async fn build_server(config: &vox_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config)
            .build()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Path prefix served by the synthesis endpoint
pub const WAV_PATH: &str = "/v1/wav";

/// Create the endpoint router for speech synthesis
///
/// Any path starting with `/v1/wav` (`/v1/wav/`, `/v1/wavx`, ...) is the
/// synthesis endpoint. Other methods there get `405`; other methods on
/// `/v1/voices` get `404`. The router owns the fallback, so it must be the
/// only fallback in the final application.
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route(WAV_PATH, post(synthesize))
        .route("/v1/voices", get(list_voices).fallback(not_found))
        .fallback(wav_prefix)
}

/// Handle speech synthesis requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    ExtractSynthesis(request): ExtractSynthesis,
) -> Result<Response> {
    tracing::debug!(
        voice = %request.voice,
        format = %request.format,
        text_len = request.text.len(),
        "TTS wav handler called"
    );

    let oh_bill = is_oh_bill(&request.text);
    let audio = server.synthesize(request).await?;

    tracing::debug!("Speech synthesis complete, {} bytes", audio.len());

    audio.into_response(oh_bill).await
}

/// Unrouted paths: the `/v1/wav` prefix family, otherwise `404`
async fn wav_prefix(State(server): State<Arc<Server>>, request: Request) -> Response {
    if !request.uri().path().starts_with(WAV_PATH) {
        return not_found().await.into_response();
    }

    if request.method() != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "POST")]).into_response();
    }

    match ExtractSynthesis::from_request(request, &server).await {
        Ok(extracted) => synthesize(State(server), extracted).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

/// List available voices, one per line
async fn list_voices(State(server): State<Arc<Server>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, TEXT_PLAIN_UTF_8)], server.voices().to_listing())
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
