use chrono::NaiveDate;
use chrono_tz::Tz;
use std::{env, path::PathBuf};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_EPOCH: &str = "2025-06-30";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
    #[error("invalid QUIZ_EPOCH value '{0}', expected YYYY-MM-DD")]
    InvalidEpoch(String),
    #[error("unknown QUIZ_TIMEZONE '{0}'")]
    UnknownTimezone(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gate_path: PathBuf,
    pub catalog_path: PathBuf,
    pub epoch: NaiveDate,
    pub timezone: Tz,
    pub sink_url: Option<String>,
}

impl Config {
    /// Reads the environment once at startup. Unset variables fall back
    /// to their defaults with a log line; set-but-invalid values are a
    /// startup error.
    pub fn load() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            gate_path: path_var("APP_DATA_PATH", "data/state.json"),
            catalog_path: path_var("QUIZ_CATALOG_PATH", "data/quiz.json"),
            epoch: parse_epoch(&string_var("QUIZ_EPOCH", DEFAULT_EPOCH))?,
            timezone: parse_timezone(&string_var("QUIZ_TIMEZONE", DEFAULT_TIMEZONE))?,
            sink_url: env::var("QUIZ_SINK_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}

pub fn parse_epoch(value: &str) -> Result<NaiveDate, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEpoch(value.to_string()))
}

pub fn parse_timezone(value: &str) -> Result<Tz, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::UnknownTimezone(value.to_string()))
}

fn string_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn path_var(key: &str, default: &str) -> PathBuf {
    string_var(key, default).into()
}
