use std::sync::Arc;

use vox_config::WavConfig;

use crate::{
    error::{SynthesisError, TtsError},
    format,
    synthesizer::Synthesizer,
    types::{SynthesisRequest, SynthesizedAudio},
    voices::VoiceSet,
};

/// Shared state for the speech endpoints
///
/// Read-only once built; requests share it through an `Arc` without locking.
pub struct Server {
    voices: VoiceSet,
    synthesizer: Arc<Synthesizer>,
    wav: WavConfig,
}

impl Server {
    pub const fn voices(&self) -> &VoiceSet {
        &self.voices
    }

    pub const fn wav_config(&self) -> &WavConfig {
        &self.wav
    }

    /// Run one synthesis to completion
    ///
    /// The work happens on its own task. If the client goes away and this
    /// future is dropped, the subprocess still runs to the end and the task
    /// removes its temporary files afterwards.
    pub async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<SynthesizedAudio> {
        let synthesizer = Arc::clone(&self.synthesizer);

        let audio = tokio::spawn(async move { synthesizer.synthesize(request).await })
            .await
            .map_err(|e| SynthesisError::Task(e.to_string()))??;

        Ok(audio)
    }
}

/// Builder for constructing the speech server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a vox_config::Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a vox_config::Config) -> Self {
        Self { config }
    }

    /// Query the synthesizer for its voices and assemble the server
    ///
    /// Fails when the voice query fails or reports nothing, or when the
    /// configured default format is not a valid descriptor.
    pub async fn build(self) -> crate::error::Result<Server> {
        let wav = self.config.wav.clone();

        if !format::validate(&wav.default_format) {
            return Err(TtsError::ConfigError(format!(
                "wav.default_format `{}` is not a valid format descriptor",
                wav.default_format
            )));
        }

        let synthesizer = Synthesizer::from_config(&self.config.synthesizer)
            .map_err(|e| TtsError::ConfigError(e.to_string()))?;

        tracing::debug!("Querying voices from `{}`", synthesizer.command_name());

        let voices = synthesizer.list_voices().await?;

        if voices.is_empty() {
            return Err(TtsError::ConfigError(format!(
                "synthesizer `{}` reported no voices",
                synthesizer.command_name()
            )));
        }

        if !voices.contains(&wav.default_voice) {
            tracing::warn!(
                default_voice = %wav.default_voice,
                "default voice is not offered by the synthesizer; requests without a voice will be rejected"
            );
        }

        tracing::info!(
            command = synthesizer.command_name(),
            voices = voices.len(),
            temp_dir = %synthesizer.temp_dir().display(),
            "speech synthesizer ready"
        );

        Ok(Server {
            voices,
            synthesizer: Arc::new(synthesizer),
            wav,
        })
    }
}
