//! Runtime settings, filled from CLI flags or `CITYWEATHER_*` environment variables.

use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Weather URL must start with http:// or https:// (got '{0}')")]
    InvalidUrl(String),
    #[error("Timeout must be between 1 and 300 seconds (got {0})")]
    InvalidTimeout(u64),
}

/// Dataset and provider settings shared by every mode.
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Global cities dataset (CSV with city, lat, lng columns).
    #[arg(long, env = "CITYWEATHER_WORLD_CSV", default_value = "data/worldcities.csv")]
    pub world_csv: PathBuf,

    /// Cyrillic cities dataset (CSV with city, lat, lng columns).
    #[arg(long, env = "CITYWEATHER_REGIONAL_CSV", default_value = "data/russiacities.csv")]
    pub regional_csv: PathBuf,

    /// Weather provider base URL.
    #[arg(long, env = "CITYWEATHER_WEATHER_URL", default_value = DEFAULT_WEATHER_URL)]
    pub weather_url: String,

    /// Outbound request timeout in seconds.
    #[arg(long, env = "CITYWEATHER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_csv: PathBuf::from("data/worldcities.csv"),
            regional_csv: PathBuf::from("data/russiacities.csv"),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weather_url.starts_with("http://") && !self.weather_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(self.weather_url.clone()));
        }
        if !(1..=300).contains(&self.timeout_secs) {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
