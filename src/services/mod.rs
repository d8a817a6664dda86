//! Cache consumers
//!
//! Services that read through the shared cache around expensive remote work
//! and invalidate slots when the state behind them changes.

pub mod auth;
pub mod provider;
pub mod weather;

pub use auth::{AuthService, LoadUserInfoOptions};
pub use provider::{OpenMeteoProvider, Place, WeatherProvider};
pub use weather::WeatherService;
