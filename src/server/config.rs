use std::str::FromStr;

use crate::server::{
    error::{config::ConfigError, AppError},
    scheduler::maintenance::MaintenanceConfig,
};

pub struct Config {
    pub database_url: String,
    pub discord_token: String,

    /// Channel receiving maintenance forfeit summaries, if any
    pub maintenance_channel_id: Option<u64>,
    pub maintenance: MaintenanceConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = MaintenanceConfig::default();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_token: required("DISCORD_TOKEN")?,
            maintenance_channel_id: optional("MAINTENANCE_CHANNEL_ID")?,
            maintenance: MaintenanceConfig {
                default_grace_period_days: optional("MAINTENANCE_GRACE_PERIOD_DAYS")?
                    .unwrap_or(defaults.default_grace_period_days),
                max_retries: optional("MAINTENANCE_MAX_RETRIES")?
                    .unwrap_or(defaults.max_retries),
                retry_delay_ms: optional("MAINTENANCE_RETRY_DELAY_MS")?
                    .unwrap_or(defaults.retry_delay_ms),
                batch_size: optional("MAINTENANCE_BATCH_SIZE")?.unwrap_or(defaults.batch_size),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses an optional variable. Unset or blank values yield `None`.
fn optional<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        _ => Ok(None),
    }
}
