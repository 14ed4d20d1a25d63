//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Filter applied until the configured level has been parsed.
const BOOTSTRAP_FILTER: &str = "info";

/// ## Summary
/// Installs the global tracing subscriber and applies the configured level.
///
/// An invalid level keeps the bootstrap filter and logs a warning.
///
/// ## Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(BOOTSTRAP_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    if let Ok(filter) = EnvFilter::try_new(config.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.level, "Invalid log level in config, keeping {BOOTSTRAP_FILTER}");
    }

    tracing::debug!(level = %config.level, "Tracing initialised");
    Ok(())
}
