//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_TTL_MINUTES;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3030";
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_IP_GEOLOCATION_URL: &str = "http://ip-api.com/json/";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in minutes for cache entries without explicit TTL
    pub default_ttl: i64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the native backend's command bridge
    pub backend_url: String,
    /// Geocoding search endpoint
    pub geocoding_url: String,
    /// Forecast endpoint
    pub forecast_url: String,
    /// IP geolocation endpoint
    pub ip_geolocation_url: String,
    /// Timeout in seconds for outgoing HTTP requests
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MINUTES` - Default cache TTL in minutes (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `BACKEND_URL` - Native backend bridge (default: http://127.0.0.1:3030)
    /// - `GEOCODING_URL`, `FORECAST_URL`, `IP_GEOLOCATION_URL` - Weather services
    /// - `HTTP_TIMEOUT_SECS` - Outgoing request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: parse_var("DEFAULT_TTL_MINUTES").unwrap_or(defaults.default_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            backend_url: env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
            geocoding_url: env::var("GEOCODING_URL").unwrap_or(defaults.geocoding_url),
            forecast_url: env::var("FORECAST_URL").unwrap_or(defaults.forecast_url),
            ip_geolocation_url: env::var("IP_GEOLOCATION_URL")
                .unwrap_or(defaults.ip_geolocation_url),
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS")
                .unwrap_or(defaults.http_timeout_secs),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_MINUTES,
            server_port: 3000,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            ip_geolocation_url: DEFAULT_IP_GEOLOCATION_URL.to_string(),
            http_timeout_secs: 10,
        }
    }
}
