use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `${VAR}` references, then deserializes and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// The default format descriptor is checked by the `tts` crate when the
    /// server is built, since the grammar lives there.
    ///
    /// # Errors
    ///
    /// Returns an error if a setting is out of range or malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_synthesizer()?;
        self.validate_wav()?;
        self.validate_health()?;
        Ok(())
    }

    fn validate_synthesizer(&self) -> anyhow::Result<()> {
        if self.synthesizer.command.trim().is_empty() {
            anyhow::bail!("synthesizer.command must not be empty");
        }

        self.synthesizer.timeout_duration()?;

        Ok(())
    }

    fn validate_wav(&self) -> anyhow::Result<()> {
        if self.wav.max_body_bytes == 0 {
            anyhow::bail!("wav.max_body_bytes must be greater than 0");
        }

        if self.wav.default_voice.trim().is_empty() {
            anyhow::bail!("wav.default_voice must not be empty");
        }

        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        if health.path == "/" || health.path == "/v1/voices" || health.path.starts_with("/v1/wav") {
            anyhow::bail!("server.health.path `{}` collides with a service route", health.path);
        }

        Ok(())
    }
}
