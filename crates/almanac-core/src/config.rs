use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::precision::Precision;

/// Name of the optional TOML file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "almanac.toml";

/// Prefix for environment overrides, e.g. `ALMANAC__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "ALMANAC";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub defaults: DefaultsConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Precision given to bare date-times converted without an explicit one.
    pub precision: Precision,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Maximum occurrences enumerated per event; `0` means unlimited.
    pub occurrence_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            defaults: DefaultsConfig {
                precision: Precision::DEFAULT,
            },
            schedule: ScheduleConfig {
                occurrence_limit: 0,
            },
        }
    }
}

impl Settings {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("defaults.precision", Precision::DEFAULT.as_str())?
            .set_default("schedule.occurrence_limit", 0)?)
    }

    /// ## Summary
    /// Loads configuration from the environment and an optional `almanac.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Env overrides
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not deserialize.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env`, and `almanac.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
