//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use vox_config::{Config, HealthConfig, ServerConfig, SynthesizerConfig, WavConfig};

use super::fake_say::FakeSay;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal configuration driving the given fake synthesizer
    pub fn new(fake: &FakeSay) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                synthesizer: SynthesizerConfig {
                    command: "/bin/sh".to_owned(),
                    args: vec![fake.script().display().to_string()],
                    temp_dir: Some(fake.temp_dir().to_path_buf()),
                    ..SynthesizerConfig::default()
                },
                wav: WavConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Enable the health endpoint
    pub fn with_health(mut self, path: &str) -> Self {
        self.config.server.health = HealthConfig {
            enabled: true,
            path: path.to_owned(),
        };
        self
    }

    /// Change the request body limit
    pub fn with_max_body_bytes(mut self, limit: u64) -> Self {
        self.config.wav.max_body_bytes = limit;
        self
    }

    /// Change the voice used when a request names none
    pub fn with_default_voice(mut self, voice: &str) -> Self {
        self.config.wav.default_voice = voice.to_owned();
        self
    }

    /// Consume the builder and return the config
    pub fn build(self) -> Config {
        self.config
    }
}
