//! cityweather — resolve a city name locally, relay its forecast.

pub mod config;
pub mod forecast;
pub mod location;
pub mod lookup;
pub mod server;

pub use config::Settings;
pub use forecast::{ForecastError, ForecastGateway};
pub use location::{CityRecord, CityResolver, ReferenceTables};
pub use lookup::{weather_for, ForecastResult, WeatherError};
