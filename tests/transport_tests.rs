//! Transport Tests
//!
//! Drives `HttpBackend` and `OpenMeteoProvider` against a local axum stub
//! bound to an ephemeral port.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use portal_cache::backend::{Backend, CommandArgs, HttpBackend};
use portal_cache::services::{OpenMeteoProvider, WeatherProvider};
use portal_cache::{Config, PortalError};
use serde_json::{json, Value};
use tokio::net::TcpListener;

type QueryLog = Mutex<Vec<HashMap<String, String>>>;

/// Query strings received by the weather stub, per endpoint.
#[derive(Default)]
struct SeenQueries {
    geocoding: QueryLog,
    forecast: QueryLog,
}

// == Helper Functions ==

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    addr
}

async fn backend_stub(Path(command): Path<String>, Json(args): Json<Value>) -> Response {
    match command.as_str() {
        "check_session_exists" => Json(json!(true)).into_response(),
        "echo" => Json(args).into_response(),
        "logout" => (StatusCode::OK, "").into_response(),
        "get_settings" => (StatusCode::INTERNAL_SERVER_ERROR, "  no session\n").into_response(),
        "open_url" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "fetch_api_data" => (StatusCode::OK, "<html>").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn start_backend() -> HttpBackend {
    let router = Router::new().route("/invoke/:command", post(backend_stub));
    let addr = serve(router).await;
    HttpBackend::new(format!("http://{addr}/"), Duration::from_secs(5)).unwrap()
}

async fn geocoding_stub(
    State(seen): State<Arc<SeenQueries>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let name = query.get("name").cloned().unwrap_or_default();
    seen.geocoding.lock().unwrap().push(query);
    match name.as_str() {
        "Sydney" => Json(json!({
            "results": [
                {"latitude": -33.87, "longitude": 151.21, "name": "Sydney", "country": "Australia"},
                {"latitude": 46.14, "longitude": -60.18, "name": "Sydney", "country": "Canada"}
            ]
        }))
        .into_response(),
        "Broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({"generationtime_ms": 0.5})).into_response(),
    }
}

async fn forecast_stub(
    State(seen): State<Arc<SeenQueries>>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    seen.forecast.lock().unwrap().push(query);
    Json(json!({
        "latitude": -33.875,
        "current_weather": {"temperature": 22.5, "weathercode": 2}
    }))
}

async fn start_weather_services() -> (SocketAddr, Arc<SeenQueries>) {
    let seen = Arc::new(SeenQueries::default());
    let router = Router::new()
        .route("/geo", get(geocoding_stub))
        .route("/forecast", get(forecast_stub))
        .route(
            "/ip/ok",
            get(|| async {
                Json(json!({
                    "status": "success",
                    "lat": -37.81,
                    "lon": 144.96,
                    "city": "Melbourne",
                    "country": "Australia"
                }))
            }),
        )
        .route(
            "/ip/fail",
            get(|| async { Json(json!({"status": "fail", "message": "private range"})) }),
        )
        .with_state(seen.clone());
    (serve(router).await, seen)
}

fn provider_at(addr: SocketAddr, ip_path: &str) -> OpenMeteoProvider {
    let config = Config {
        geocoding_url: format!("http://{addr}/geo"),
        forecast_url: format!("http://{addr}/forecast"),
        ip_geolocation_url: format!("http://{addr}{ip_path}"),
        ..Config::default()
    };
    OpenMeteoProvider::from_config(&config).unwrap()
}

// == Backend Transport ==

#[tokio::test]
async fn test_backend_returns_json_reply() {
    let backend = start_backend().await;

    let mut args = CommandArgs::new();
    args.insert("url".to_string(), json!("https://portal.school"));

    let active = backend.invoke("check_session_exists", CommandArgs::new()).await.unwrap();
    assert_eq!(active, json!(true));
    assert_eq!(
        backend.invoke("echo", args).await.unwrap(),
        json!({"url": "https://portal.school"})
    );
}

#[tokio::test]
async fn test_backend_empty_success_is_null() {
    let backend = start_backend().await;

    let value = backend.invoke("logout", CommandArgs::new()).await.unwrap();

    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn test_backend_error_carries_body_text() {
    let backend = start_backend().await;

    let err = backend.invoke("get_settings", CommandArgs::new()).await.unwrap_err();

    match err {
        PortalError::Backend { command, message } => {
            assert_eq!(command, "get_settings");
            assert_eq!(message, "no session");
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_backend_error_without_body_uses_status() {
    let backend = start_backend().await;

    let err = backend.invoke("open_url", CommandArgs::new()).await.unwrap_err();

    match err {
        PortalError::Backend { command, message } => {
            assert_eq!(command, "open_url");
            assert_eq!(message, "503 Service Unavailable");
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_backend_non_json_success_is_decode_error() {
    let backend = start_backend().await;

    let err = backend.invoke("fetch_api_data", CommandArgs::new()).await.unwrap_err();

    assert!(matches!(err, PortalError::Decode(_)));
}

#[tokio::test]
async fn test_backend_unreachable_is_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    let err = backend.invoke("logout", CommandArgs::new()).await.unwrap_err();

    assert!(matches!(err, PortalError::Http(_)));
}

// == Weather Provider Transport ==

#[tokio::test]
async fn test_geocode_sends_search_query_and_takes_first_match() {
    let (addr, seen) = start_weather_services().await;
    let provider = provider_at(addr, "/ip/ok");

    let place = provider.geocode("Sydney", "AU").await.unwrap();

    assert_eq!(place.name, "Sydney");
    assert_eq!(place.country, "Australia");
    assert_eq!(place.latitude, -33.87);

    let queries = seen.geocoding.lock().unwrap();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query["name"], "Sydney");
    assert_eq!(query["countryCode"], "AU");
    assert_eq!(query["count"], "10");
    assert_eq!(query["language"], "en");
    assert_eq!(query["format"], "json");
}

#[tokio::test]
async fn test_geocode_without_results_is_location_not_found() {
    let (addr, _) = start_weather_services().await;
    let provider = provider_at(addr, "/ip/ok");

    let err = provider.geocode("Atlantis", "").await.unwrap_err();

    match err {
        PortalError::LocationNotFound(city) => assert_eq!(city, "Atlantis"),
        other => panic!("expected location not found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_geocode_error_status_is_http_error() {
    let (addr, _) = start_weather_services().await;
    let provider = provider_at(addr, "/ip/ok");

    let err = provider.geocode("Broken", "AU").await.unwrap_err();

    match err {
        PortalError::Http(e) => {
            assert_eq!(e.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        }
        other => panic!("expected http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_current_weather_sends_coordinates() {
    let (addr, seen) = start_weather_services().await;
    let provider = provider_at(addr, "/ip/ok");

    let weather = provider.current_weather(-33.87, 151.21).await.unwrap();

    assert_eq!(weather.temperature, 22.5);
    assert_eq!(weather.weathercode, 2);
    assert!(weather.location.is_empty());

    let queries = seen.forecast.lock().unwrap();
    let query = &queries[0];
    assert_eq!(query["latitude"], "-33.87");
    assert_eq!(query["longitude"], "151.21");
    assert_eq!(query["current_weather"], "true");
    assert_eq!(query["timezone"], "auto");
}

#[tokio::test]
async fn test_ip_location_success() {
    let (addr, _) = start_weather_services().await;
    let provider = provider_at(addr, "/ip/ok");

    let place = provider.locate_by_ip().await.unwrap();

    assert_eq!(place.name, "Melbourne");
    assert_eq!(place.country, "Australia");
    assert_eq!(place.longitude, 144.96);
}

#[tokio::test]
async fn test_ip_location_failure_is_geolocation_error() {
    let (addr, _) = start_weather_services().await;
    let provider = provider_at(addr, "/ip/fail");

    let err = provider.locate_by_ip().await.unwrap_err();

    assert_eq!(err.to_string(), "IP geolocation failed: private range");
    assert!(matches!(err, PortalError::Geolocation(message) if message == "private range"));
}
