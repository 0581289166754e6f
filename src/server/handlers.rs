use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::location::clamp_limit;
use crate::lookup::{weather_for, ForecastResult, WeatherError};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        let status = match err {
            WeatherError::NotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError(status, err.to_string())
    }
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/weather/{city} ─────────────────────────────────────

pub async fn weather(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<ForecastResult>, ApiError> {
    let start = Instant::now();

    let result = weather_for(&state.resolver, &state.gateway, &city).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match result {
        Ok(result) => {
            tracing::info!(query = %city, city = %result.city, elapsed_ms, "GET /api/weather");
            Ok(Json(result))
        }
        Err(e) => {
            tracing::warn!(query = %city, error = %e, elapsed_ms, "GET /api/weather failed");
            Err(e.into())
        }
    }
}

// ─── GET /api/suggestions/{query} ────────────────────────────────

#[derive(Deserialize)]
pub struct SuggestionQuery {
    pub limit: Option<usize>,
}

pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
    Query(params): Query<SuggestionQuery>,
) -> Json<Vec<String>> {
    let names = state.resolver.suggest(&query, clamp_limit(params.limit));
    tracing::debug!(query = %query, count = names.len(), "GET /api/suggestions");
    Json(names)
}
