//! Test doubles for the native backend and the weather services.

mod mock_backend;
mod mock_weather_provider;

#[allow(unused_imports)]
pub use mock_backend::{MockBackend, LOGIN_PATH, PHOTO_PATH};
#[allow(unused_imports)]
pub use mock_weather_provider::MockWeatherProvider;
