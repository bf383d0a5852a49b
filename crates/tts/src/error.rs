use std::{process::ExitStatus, time::Duration};

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use vox_core::{HttpError, headers::TEXT_PLAIN_UTF_8};

pub type Result<T> = std::result::Result<T, TtsError>;

/// Failures while driving the external synthesizer
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Temporary input or output file could not be prepared
    #[error("failed to prepare temporary files: {0}")]
    TempFile(#[source] std::io::Error),

    /// The program could not be started (missing, not executable, ...)
    #[error("failed to launch synthesizer `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and reported failure
    #[error("synthesizer exited with {status}: {stderr}")]
    Exited { status: ExitStatus, stderr: String },

    /// The program was killed after the configured timeout
    #[error("synthesizer timed out after {0:?}")]
    TimedOut(Duration),

    /// The task driving the program panicked or was aborted
    #[error("synthesis task failed: {0}")]
    Task(String),
}

/// `/v1/wav` and `/v1/voices` errors with their HTTP status codes
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Invalid format")]
    InvalidFormat,

    #[error("Invalid voice")]
    InvalidVoice,

    /// Query string could not be decoded
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid Content-Length")]
    InvalidContentLength,

    #[error("Content-Length required")]
    LengthRequired,

    #[error("Request body is too large, limit is {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    /// Body was shorter than declared or not UTF-8
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// Server could not be built from configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Anything else; the message is for logs only
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidFormat
            | Self::InvalidVoice
            | Self::InvalidQuery(_)
            | Self::InvalidContentLength
            | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::LengthRequired => StatusCode::LENGTH_REQUIRED,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Synthesis(_) | Self::ConfigError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidFormat
            | Self::InvalidVoice
            | Self::InvalidQuery(_)
            | Self::InvalidContentLength
            | Self::InvalidBody(_) => {
                "invalid_request_error"
            }
            Self::LengthRequired => "length_required",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::Synthesis(_) => "synthesis_error",
            Self::ConfigError(_) | Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Synthesis(_) => "Synthesis failed".to_string(),
            Self::ConfigError(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!(error = %self, error_type = self.error_type(), "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        (
            status,
            [(http::header::CONTENT_TYPE, TEXT_PLAIN_UTF_8)],
            self.client_message(),
        )
            .into_response()
    }
}
