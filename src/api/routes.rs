//! API Routes
//!
//! Configures the Axum router with all client endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    city_weather_handler, clear_cache_handler, default_ttl_handler, delete_cache_key_handler,
    get_weather_settings_handler, health_handler, ip_weather_handler, login_handler,
    logout_handler, put_weather_settings_handler, session_handler, stats_handler,
    user_info_handler, weather_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, the UI is served from its own origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/session", get(session_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/user-info", get(user_info_handler))
        .route("/weather", get(weather_handler))
        .route("/weather/city", get(city_weather_handler))
        .route("/weather/ip", get(ip_weather_handler))
        .route(
            "/settings/weather",
            get(get_weather_settings_handler).put(put_weather_settings_handler),
        )
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/default-ttl", put(default_ttl_handler))
        .route("/cache/:key", delete(delete_cache_key_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
