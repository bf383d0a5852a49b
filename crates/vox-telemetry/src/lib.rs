//! Logging for vox
//!
//! Installs a `tracing-subscriber` registry with an env filter and a text
//! or JSON formatting layer.

use tracing_subscriber::EnvFilter;
use vox_config::{LogFormat, TelemetryConfig};

/// Filter used when neither the caller nor the config provides a valid one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize logging from configuration
///
/// `override_filter` (from the command line) wins over the configured
/// filter. An invalid directive falls back to [`DEFAULT_LOG_FILTER`]
/// instead of refusing to start.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init(config: Option<&TelemetryConfig>, override_filter: Option<&str>) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let directive = resolve_filter(config, override_filter);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let format = config.map(|c| c.format).unwrap_or_default();

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn resolve_filter<'a>(config: Option<&'a TelemetryConfig>, override_filter: Option<&'a str>) -> &'a str {
    override_filter
        .or_else(|| config.and_then(|c| c.log_filter.as_deref()))
        .unwrap_or(DEFAULT_LOG_FILTER)
}
