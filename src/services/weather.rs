//! Weather lookups cached in a single slot.
//!
//! Lookups by city and by IP share [`CacheKey::Weather`]: whichever runs
//! first fills the slot and the other is served from it until it expires or
//! the weather settings change.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::backend::BackendClient;
use crate::cache::{ttl, CacheKey, SharedCache};
use crate::error::Result;
use crate::models::{WeatherData, WeatherSettings};
use crate::services::provider::{Place, WeatherProvider};

#[derive(Clone)]
pub struct WeatherService {
    cache: SharedCache,
    backend: BackendClient,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(
        cache: SharedCache,
        backend: BackendClient,
        provider: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            cache,
            backend,
            provider,
        }
    }

    /// Weather fields of the persisted settings. Falls back to disabled
    /// defaults when the settings cannot be read.
    pub async fn load_weather_settings(&self) -> WeatherSettings {
        match self.backend.get_settings().await {
            Ok(settings) => WeatherSettings::from_settings(&settings),
            Err(e) => {
                warn!(error = %e, "could not read settings, weather disabled");
                WeatherSettings::default()
            }
        }
    }

    /// Persists new weather settings and drops the cached snapshot, which
    /// may describe a different place.
    pub async fn save_weather_settings(&self, settings: &WeatherSettings) -> Result<()> {
        let mut document = self.backend.get_settings().await?;
        settings.apply_to(&mut document);
        self.backend.save_settings(document).await?;

        self.cache.write().await.delete(&CacheKey::Weather);
        info!("weather settings saved, cached weather invalidated");
        Ok(())
    }

    /// Weather according to the saved settings: nothing when disabled, by IP
    /// when location is forced, otherwise by the configured city.
    pub async fn current_weather(&self) -> Option<Arc<WeatherData>> {
        let settings = self.load_weather_settings().await;
        if !settings.weather_enabled {
            return None;
        }
        if settings.force_use_location {
            self.fetch_weather_with_ip().await
        } else {
            self.fetch_weather(&settings.weather_city, &settings.weather_country)
                .await
        }
    }

    /// Weather for a named city. Returns `None` for a blank city or when
    /// any lookup fails.
    pub async fn fetch_weather(&self, city: &str, country: &str) -> Option<Arc<WeatherData>> {
        if city.trim().is_empty() {
            return None;
        }
        if let Some(weather) = self.cached().await {
            return Some(weather);
        }

        let result = self.lookup_city(city, country).await;
        self.store(result, "Failed to load weather").await
    }

    /// Weather for the caller's IP location. Returns `None` when any lookup
    /// fails.
    pub async fn fetch_weather_with_ip(&self) -> Option<Arc<WeatherData>> {
        if let Some(weather) = self.cached().await {
            return Some(weather);
        }

        let result = self.lookup_ip().await;
        self.store(result, "Failed to load weather with IP").await
    }

    async fn lookup_city(&self, city: &str, country: &str) -> Result<WeatherData> {
        let place = self.provider.geocode(city, country).await?;
        self.weather_at(place).await
    }

    async fn lookup_ip(&self) -> Result<WeatherData> {
        let place = self.provider.locate_by_ip().await?;
        self.weather_at(place).await
    }

    async fn weather_at(&self, place: Place) -> Result<WeatherData> {
        let mut weather = self
            .provider
            .current_weather(place.latitude, place.longitude)
            .await?;
        weather.location = place.name;
        weather.country = place.country;
        Ok(weather)
    }

    async fn cached(&self) -> Option<Arc<WeatherData>> {
        let cached = self.cache.write().await.get(&CacheKey::Weather);
        cached.and_then(|value| value.into_weather())
    }

    async fn store(&self, result: Result<WeatherData>, context: &str) -> Option<Arc<WeatherData>> {
        match result {
            Ok(weather) => {
                let weather = Arc::new(weather);
                self.cache.write().await.set(
                    CacheKey::Weather,
                    weather.clone().into(),
                    Some(ttl::MEDIUM),
                );
                debug!(location = %weather.location, "weather cached");
                Some(weather)
            }
            Err(e) => {
                error!(error = %e, "{}", context);
                None
            }
        }
    }
}
