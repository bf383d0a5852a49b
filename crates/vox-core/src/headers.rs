//! Header names that are not part of the `http` crate

use http::HeaderName;

/// Diagnostic header on synthesized audio responses
///
/// Carries `true` when the submitted text addresses Bill.
pub const X_OH_BILL: HeaderName = HeaderName::from_static("x-oh-bill");

/// Content type of synthesized audio
pub const AUDIO_WAV: &str = "audio/wav";

/// Content type of every plain text body the service produces
pub const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";
