use crate::forecast::ForecastGateway;
use crate::location::CityResolver;

/// Shared, read-only request state.
pub struct AppState {
    pub resolver: CityResolver,
    pub gateway: ForecastGateway,
}
