//! Resolve a city, then fetch its forecast.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::forecast::{ForecastError, ForecastGateway};
use crate::location::{CityRecord, CityResolver, LocationError};

/// The combined answer for one city.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResult {
    pub city: String,
    pub location: CityRecord,
    pub forecast: Value,
}

/// The two ways a lookup can fail. Everything past resolution is `Upstream`.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    NotFound(#[from] LocationError),
    #[error(transparent)]
    Upstream(#[from] ForecastError),
}

pub async fn weather_for(
    resolver: &CityResolver,
    gateway: &ForecastGateway,
    query: &str,
) -> Result<ForecastResult, WeatherError> {
    let location = resolver.resolve(query)?;
    let forecast = gateway.fetch(location.latitude, location.longitude).await?;

    Ok(ForecastResult {
        city: location.name.clone(),
        location,
        forecast,
    })
}
