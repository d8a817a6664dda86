//! Request DTOs for the client HTTP surface
//!
//! Defines the structure of incoming bodies and query strings.

use serde::Deserialize;

/// Body of `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Portal URL the login window should open
    pub url: String,
}

/// Body of `PUT /cache/default-ttl`
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultTtlRequest {
    /// New default TTL in minutes
    pub minutes: i64,
}

/// Query of `GET /user-info`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfoQuery {
    #[serde(default)]
    pub disable_school_picture: bool,
}

/// Query of `GET /weather/city`
#[derive(Debug, Clone, Deserialize)]
pub struct CityWeatherQuery {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}
