use serde::Deserialize;

/// Health check endpoint configuration
///
/// Off unless enabled, so the public route table only grows on request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "/health".to_string()
}
