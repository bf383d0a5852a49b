use serde::Deserialize;

/// Defaults and limits for `POST /v1/wav`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WavConfig {
    /// Format descriptor used when the request has no `format` parameter
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Voice used when the request has no `voice` parameter
    #[serde(default = "default_voice")]
    pub default_voice: String,
    /// Largest accepted `Content-Length`
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,
}

impl Default for WavConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_voice: default_voice(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_format() -> String {
    "LEI24@44100".to_string()
}

fn default_voice() -> String {
    "alex".to_string()
}

const fn default_max_body_bytes() -> u64 {
    20 * 1024
}
