//! API Handlers
//!
//! HTTP request handlers for each client endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::backend::{Backend, BackendClient, HttpBackend};
use crate::cache::{CacheKey, PortalCache, SharedCache};
use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::models::{
    CacheClearResponse, CityWeatherQuery, DefaultTtlRequest, HealthResponse, LoginRequest,
    LogoutResponse, SessionResponse, StatsResponse, UserInfo, UserInfoQuery, WeatherData,
    WeatherSettings,
};
use crate::services::{
    AuthService, LoadUserInfoOptions, OpenMeteoProvider, WeatherProvider, WeatherService,
};

/// Application state shared across all handlers.
///
/// Holds the one cache instance of the process and the consumers built
/// around it.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
    pub auth: AuthService,
    pub weather: WeatherService,
}

impl AppState {
    /// Wires consumers around `cache`.
    pub fn new(
        cache: PortalCache,
        backend: Arc<dyn Backend>,
        provider: Arc<dyn WeatherProvider>,
    ) -> Self {
        let cache = crate::cache::shared(cache);
        let backend = BackendClient::new(backend);
        Self {
            auth: AuthService::new(cache.clone(), backend.clone()),
            weather: WeatherService::new(cache.clone(), backend, provider),
            cache,
        }
    }

    /// Builds the production state: HTTP backend bridge and Open-Meteo.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = HttpBackend::new(
            config.backend_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )?;
        let provider = OpenMeteoProvider::from_config(config)?;
        Ok(Self::new(
            PortalCache::new(config.default_ttl),
            Arc::new(backend),
            Arc::new(provider),
        ))
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.default_ttl()))
}

/// Handler for GET /session
pub async fn session_handler(State(state): State<AppState>) -> Result<Json<SessionResponse>> {
    let active = state.auth.check_session().await?;
    Ok(Json(SessionResponse { active }))
}

/// Handler for POST /login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<StatusCode> {
    state.auth.start_login(&req.url).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Handler for POST /logout
pub async fn logout_handler(State(state): State<AppState>) -> Result<Json<LogoutResponse>> {
    let logged_out = state.auth.logout().await?;
    Ok(Json(LogoutResponse { logged_out }))
}

/// Handler for GET /user-info
///
/// Replies `null` when the profile could not be loaded.
pub async fn user_info_handler(
    State(state): State<AppState>,
    Query(query): Query<UserInfoQuery>,
) -> Json<Option<UserInfo>> {
    let options = LoadUserInfoOptions {
        disable_school_picture: query.disable_school_picture,
    };
    let info = state.auth.load_user_info(options).await;
    Json(info.map(|info| (*info).clone()))
}

/// Handler for GET /weather
pub async fn weather_handler(State(state): State<AppState>) -> Json<Option<WeatherData>> {
    let weather = state.weather.current_weather().await;
    Json(weather.map(|weather| (*weather).clone()))
}

/// Handler for GET /weather/city
///
/// A blank or missing city yields `null`, like any other absent weather.
pub async fn city_weather_handler(
    State(state): State<AppState>,
    Query(query): Query<CityWeatherQuery>,
) -> Json<Option<WeatherData>> {
    let weather = state.weather.fetch_weather(&query.city, &query.country).await;
    Json(weather.map(|weather| (*weather).clone()))
}

/// Handler for GET /weather/ip
pub async fn ip_weather_handler(State(state): State<AppState>) -> Json<Option<WeatherData>> {
    let weather = state.weather.fetch_weather_with_ip().await;
    Json(weather.map(|weather| (*weather).clone()))
}

/// Handler for GET /settings/weather
pub async fn get_weather_settings_handler(State(state): State<AppState>) -> Json<WeatherSettings> {
    Json(state.weather.load_weather_settings().await)
}

/// Handler for PUT /settings/weather
pub async fn put_weather_settings_handler(
    State(state): State<AppState>,
    Json(settings): Json<WeatherSettings>,
) -> Result<Json<WeatherSettings>> {
    state.weather.save_weather_settings(&settings).await?;
    Ok(Json(settings))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<CacheClearResponse> {
    state.cache.write().await.clear();
    Json(CacheClearResponse::new("Cache cleared"))
}

/// Handler for DELETE /cache/:key
pub async fn delete_cache_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CacheClearResponse>> {
    let key: CacheKey = key.parse().map_err(PortalError::InvalidRequest)?;
    state.cache.write().await.delete(&key);
    Ok(Json(CacheClearResponse::new(format!("Key '{}' invalidated", key))))
}

/// Handler for PUT /cache/default-ttl
pub async fn default_ttl_handler(
    State(state): State<AppState>,
    Json(req): Json<DefaultTtlRequest>,
) -> Json<CacheClearResponse> {
    state.cache.write().await.set_default_ttl(req.minutes);
    Json(CacheClearResponse::new(format!(
        "Default TTL set to {} minutes",
        req.minutes
    )))
}
