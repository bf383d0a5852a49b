use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// `tracing` filter directive (e.g. "info" or "tts=debug,info")
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Output format of log lines
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
