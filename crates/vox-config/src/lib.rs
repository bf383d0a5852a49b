#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod synthesizer;
pub mod telemetry;
pub mod wav;

use serde::Deserialize;

pub use health::*;
pub use server::*;
pub use synthesizer::*;
pub use telemetry::*;
pub use wav::*;

/// Top-level vox configuration
///
/// Every section is optional; an empty file yields a server that drives
/// the system `say` binary on `127.0.0.1:8080`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// External speech synthesizer
    #[serde(default)]
    pub synthesizer: SynthesizerConfig,
    /// `/v1/wav` request defaults and limits
    #[serde(default)]
    pub wav: WavConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
