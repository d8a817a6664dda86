//! Data models
//!
//! Payloads the client caches, plus the DTOs used by the HTTP surface.

pub mod requests;
pub mod responses;
pub mod user;
pub mod weather;

// Re-export commonly used types
pub use requests::{CityWeatherQuery, DefaultTtlRequest, LoginRequest, UserInfoQuery};
pub use responses::{
    CacheClearResponse, ErrorResponse, HealthResponse, LogoutResponse, SessionResponse,
    StatsResponse,
};
pub use user::{SamlProvider, UserInfo, UserMeta};
pub use weather::{WeatherData, WeatherSettings};
