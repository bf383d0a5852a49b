use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

/// External speech synthesizer invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesizerConfig {
    /// Program to run (looked up on `PATH` when not absolute)
    #[serde(default = "default_command")]
    pub command: String,
    /// Arguments placed before every invocation's own arguments
    #[serde(default)]
    pub args: Vec<String>,
    /// Arguments that make the synthesizer print its voices
    #[serde(default = "default_list_voices_args")]
    pub list_voices_args: Vec<String>,
    /// Directory for per-request temporary files (system temp dir when unset)
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// Kill the synthesizer after this long (e.g. "30s", "2m"); no limit when unset
    #[serde(default)]
    pub timeout: Option<String>,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
            list_voices_args: default_list_voices_args(),
            temp_dir: None,
            timeout: None,
        }
    }
}

impl SynthesizerConfig {
    /// Parsed synthesis timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is set but is not a valid duration
    pub fn timeout_duration(&self) -> anyhow::Result<Option<Duration>> {
        self.timeout
            .as_deref()
            .map(|raw| {
                duration_str::parse(raw).map_err(|e| anyhow::anyhow!("invalid synthesizer.timeout `{raw}`: {e}"))
            })
            .transpose()
    }

    /// Directory where temporary text and audio files are created
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

fn default_command() -> String {
    "say".to_string()
}

fn default_list_voices_args() -> Vec<String> {
    vec!["-v".to_string(), "?".to_string()]
}
