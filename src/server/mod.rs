mod handlers;
mod state;
mod static_files;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/static/style.css", get(handlers::style))
        .route("/static/app.js", get(handlers::script))
        .route("/api/weather/{city}", get(handlers::weather))
        .route("/api/suggestions/{query}", get(handlers::suggestions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router(Arc::new(state));
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("cityweather listening on http://{}", addr);

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{fake_upstream, ForecastGateway};
    use crate::location::{CityRecord, CityResolver, ReferenceTable, ReferenceTables};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    fn tables() -> Arc<ReferenceTables> {
        Arc::new(ReferenceTables {
            global: ReferenceTable::from_records(vec![
                CityRecord::new("New York", 40.6943, -73.9249),
                CityRecord::new("York", 53.9583, -1.0803),
                CityRecord::new("London", 51.5072, -0.1275),
                CityRecord::new("Londonderry", 54.9958, -7.3074),
            ]),
            regional: ReferenceTable::from_records(vec![
                CityRecord::new("Москва", 55.7558, 37.6173),
                CityRecord::new("Мосальск", 54.4930, 34.9860),
            ]),
        })
    }

    fn router(upstream: &str) -> Router {
        build_router(Arc::new(AppState {
            resolver: CityResolver::new(tables()),
            gateway: ForecastGateway::new(upstream, Duration::from_secs(5)),
        }))
    }

    /// Percent-encode a path segment (non-ASCII bytes and spaces).
    fn encode(segment: &str) -> String {
        segment
            .bytes()
            .map(|b| {
                if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                    (b as char).to_string()
                } else {
                    format!("%{:02X}", b)
                }
            })
            .collect()
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(app, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, body) = get(router("http://127.0.0.1:9"), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Weather Forecast"));
    }

    #[tokio::test]
    async fn test_static_assets() {
        let (status, _) = get(router("http://127.0.0.1:9"), "/static/app.js").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get(router("http://127.0.0.1:9"), "/static/style.css").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_weather_english() {
        let app = router(&fake_upstream::healthy().await);
        let (status, data) = get_json(app, "/api/weather/London").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["city"], "London");
        assert_eq!(data["location"]["name"], "London");
        assert_eq!(data["location"]["latitude"], 51.5072);
        assert_eq!(data["location"]["longitude"], -0.1275);
        assert!(data["forecast"].as_object().is_some_and(|f| !f.is_empty()));
    }

    #[tokio::test]
    async fn test_weather_russian() {
        let app = router(&fake_upstream::healthy().await);
        let uri = format!("/api/weather/{}", encode("Москва"));
        let (status, data) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["city"], "Москва");
        assert!(data.get("forecast").is_some());
    }

    #[tokio::test]
    async fn test_weather_exact_beats_partial() {
        let app = router(&fake_upstream::healthy().await);
        let (status, data) = get_json(app, "/api/weather/york").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["city"], "York");
    }

    #[tokio::test]
    async fn test_weather_invalid_city() {
        let app = router(&fake_upstream::healthy().await);
        let (status, data) = get_json(app, "/api/weather/NonExistentCity123").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(data["code"], 404);
        assert!(data["error"].as_str().unwrap().contains("NonExistentCity123"));
    }

    #[tokio::test]
    async fn test_weather_upstream_failure() {
        let app = router(&fake_upstream::failing().await);
        let (status, data) = get_json(app, "/api/weather/London").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(data["code"], 500);
        assert!(data["error"].as_str().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_suggestions_english() {
        let (status, data) = get_json(router("http://127.0.0.1:9"), "/api/suggestions/Lon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data, serde_json::json!(["London", "Londonderry"]));
    }

    #[tokio::test]
    async fn test_suggestions_russian() {
        let uri = format!("/api/suggestions/{}", encode("Мос"));
        let (status, data) = get_json(router("http://127.0.0.1:9"), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data, serde_json::json!(["Москва", "Мосальск"]));
    }

    #[tokio::test]
    async fn test_suggestions_limit() {
        let (status, data) =
            get_json(router("http://127.0.0.1:9"), "/api/suggestions/o?limit=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data, serde_json::json!(["New York"]));
    }

    #[tokio::test]
    async fn test_suggestions_no_match_is_empty_list() {
        let (status, data) = get_json(router("http://127.0.0.1:9"), "/api/suggestions/zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data, serde_json::json!([]));
    }
}
