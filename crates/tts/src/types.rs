use std::{
    path::Path,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    body::{Body, Bytes},
    response::Response,
};
use futures_util::Stream;
use tempfile::TempPath;
use tokio_util::io::ReaderStream;
use vox_core::headers::{AUDIO_WAV, X_OH_BILL};

use crate::error::TtsError;

/// One validated `/v1/wav` request
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// Text to speak
    pub text: String,
    /// Lower-cased voice name, known to the voice registry
    pub voice: String,
    /// Format descriptor exactly as the client sent it (or the default)
    pub format: String,
}

/// A synthesized WAV file owned by the current request
///
/// The file is deleted when this value, or the response body built from
/// it, is dropped.
#[derive(Debug)]
pub struct SynthesizedAudio {
    file: TempPath,
    len: u64,
}

impl SynthesizedAudio {
    pub(crate) const fn new(file: TempPath, len: u64) -> Self {
        Self { file, len }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Size of the file in bytes
    pub const fn len(&self) -> u64 {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stream the file as a `200 audio/wav` response
    ///
    /// The connection is closed after the response. `oh_bill` is reported
    /// in the `X-Oh-Bill` diagnostic header.
    pub async fn into_response(self, oh_bill: bool) -> crate::Result<Response> {
        let reader = tokio::fs::File::open(&self.file)
            .await
            .map_err(|e| TtsError::Internal(format!("failed to open synthesized audio: {e}")))?;

        let body = Body::from_stream(OwnedFileStream {
            inner: ReaderStream::new(reader),
            _file: self.file,
        });

        Response::builder()
            .header(http::header::CONNECTION, "close")
            .header(http::header::CONTENT_LENGTH, self.len)
            .header(http::header::CONTENT_TYPE, AUDIO_WAV)
            .header(X_OH_BILL, if oh_bill { "true" } else { "false" })
            .body(body)
            .map_err(|e| TtsError::Internal(format!("failed to build audio response: {e}")))
    }
}

/// File contents as a byte stream that deletes the file once dropped
///
/// `inner` is declared first so the handle is closed before removal.
struct OwnedFileStream {
    inner: ReaderStream<tokio::fs::File>,
    _file: TempPath,
}

impl Stream for OwnedFileStream {
    type Item = std::io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
