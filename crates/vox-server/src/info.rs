use std::sync::Arc;

use axum::response::IntoResponse;
use vox_config::WavConfig;
use vox_core::headers::TEXT_PLAIN_UTF_8;

/// Usage text served at `/`
pub fn render(wav: &WavConfig) -> String {
    format!(
        "\
vox: text to speech over HTTP

POST /v1/wav?voice=<voice>&format=<format>
    Speak the request body (UTF-8 text, at most {max} bytes, Content-Length
    required) and return the audio as audio/wav.

    voice   a name from GET /v1/voices, any case (default: {voice})
    format  [BE|LE](F|I|UI)(8|16|24|32|64)@<sample rate>, or `asterisk` for
            LEI16@8000 (default: {format})

GET /v1/voices
    Available voices, one per line.
",
        max = wav.max_body_bytes,
        voice = wav.default_voice,
        format = wav.default_format,
    )
}

/// Serve the prerendered usage text
pub async fn info_handler(text: Arc<str>) -> impl IntoResponse {
    ([(http::header::CONTENT_TYPE, TEXT_PLAIN_UTF_8)], text.to_string())
}
