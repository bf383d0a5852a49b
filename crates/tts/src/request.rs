use std::sync::Arc;

use axum::{body::Body, extract::Query};

use crate::{error::TtsError, format, server::Server, types::SynthesisRequest};

/// Query parameters of `POST /v1/wav`
///
/// Unknown keys are ignored; when a key repeats, its first value wins.
#[derive(Debug, Default)]
struct WavParams {
    format: Option<String>,
    voice: Option<String>,
}

impl WavParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "format" => &mut params.format,
                "voice" => &mut params.voice,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Extractor for `/v1/wav` requests
///
/// Checks run in a fixed order: format, voice, `Content-Length`, body.
/// An oversized request is rejected from its headers alone; the body is
/// never read.
pub struct ExtractSynthesis(pub SynthesisRequest);

impl axum::extract::FromRequest<Arc<Server>> for ExtractSynthesis {
    type Rejection = TtsError;

    async fn from_request(request: http::Request<Body>, server: &Arc<Server>) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();
        let defaults = server.wav_config();

        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| TtsError::InvalidQuery(e.body_text()))?;
        let params = WavParams::from_pairs(pairs);

        let format = params.format.unwrap_or_else(|| defaults.default_format.clone());
        if !format::validate(&format) {
            return Err(TtsError::InvalidFormat);
        }

        let voice = params
            .voice
            .unwrap_or_else(|| defaults.default_voice.clone())
            .to_lowercase();
        if !server.voices().contains(&voice) {
            return Err(TtsError::InvalidVoice);
        }

        let declared = declared_length(&parts.headers)?;
        if declared > defaults.max_body_bytes {
            return Err(TtsError::PayloadTooLarge {
                limit: defaults.max_body_bytes,
            });
        }

        let text = read_text(body, declared).await?;

        Ok(Self(SynthesisRequest { text, voice, format }))
    }
}

fn declared_length(headers: &http::HeaderMap) -> Result<u64, TtsError> {
    let value = headers
        .get(http::header::CONTENT_LENGTH)
        .ok_or(TtsError::LengthRequired)?;

    value
        .to_str()
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .ok_or(TtsError::InvalidContentLength)
}

/// Read exactly `declared` bytes and decode them as UTF-8
async fn read_text(body: Body, declared: u64) -> Result<String, TtsError> {
    let limit = usize::try_from(declared).map_err(|_| TtsError::InvalidContentLength)?;

    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| TtsError::InvalidBody(format!("failed to read body: {e}")))?;

    if bytes.len() != limit {
        return Err(TtsError::InvalidBody(format!(
            "expected {limit} bytes, received {}",
            bytes.len()
        )));
    }

    String::from_utf8(bytes.to_vec()).map_err(|e| TtsError::InvalidBody(format!("body is not UTF-8: {e}")))
}
