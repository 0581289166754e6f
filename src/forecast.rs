//! Forecast gateway — a single GET to Open-Meteo, body relayed untouched.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Hourly fields requested from the provider.
pub const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,weathercode";
/// Daily fields requested from the provider.
pub const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max";

const USER_AGENT: &str = concat!("cityweather/", env!("CARGO_PKG_VERSION"));

/// Upstream failures. All of them surface as a generic server error.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Weather provider unreachable: {0}")]
    Network(String),
    #[error("Weather provider returned HTTP {status}")]
    Status { status: u16 },
    #[error("Invalid weather provider response: {0}")]
    InvalidResponse(String),
    #[error("Forecast task failed: {0}")]
    Task(String),
}

/// Outbound client for the weather provider.
#[derive(Debug, Clone)]
pub struct ForecastGateway {
    agent: ureq::Agent,
    base_url: String,
}

impl ForecastGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Blocking fetch. Use [`ForecastGateway::fetch`] from async code.
    pub fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<Value, ForecastError> {
        let url = format!("{}/forecast", self.base_url);

        let response = self
            .agent
            .get(&url)
            .query("latitude", &latitude.to_string())
            .query("longitude", &longitude.to_string())
            .query("hourly", HOURLY_FIELDS)
            .query("daily", DAILY_FIELDS)
            .query("timezone", "auto")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(status, _) => ForecastError::Status { status },
                ureq::Error::Transport(t) => ForecastError::Network(t.to_string()),
            })?;

        response
            .into_json::<Value>()
            .map_err(|e| ForecastError::InvalidResponse(e.to_string()))
    }

    /// Run the blocking fetch on the blocking pool.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Value, ForecastError> {
        let gateway = self.clone();
        tokio::task::spawn_blocking(move || gateway.fetch_forecast(latitude, longitude))
            .await
            .map_err(|e| ForecastError::Task(e.to_string()))?
    }
}
