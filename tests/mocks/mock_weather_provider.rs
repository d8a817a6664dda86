use async_trait::async_trait;
use portal_cache::error::{PortalError, Result};
use portal_cache::models::WeatherData;
use portal_cache::services::{Place, WeatherProvider};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// Weather provider with fixed places. Each forecast reports its own call
/// number as the temperature so results can be told apart.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockWeatherProvider {
    places: Arc<Mutex<HashMap<String, Place>>>,
    ip_place: Arc<Mutex<Option<Place>>>,
    gate: Option<Arc<Barrier>>,
    geocode_calls: Arc<AtomicUsize>,
    ip_calls: Arc<AtomicUsize>,
    forecast_calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockWeatherProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(self, city: &str, country: &str) -> Self {
        self.places.lock().unwrap().insert(
            city.to_string(),
            Place {
                latitude: -33.87,
                longitude: 151.21,
                name: city.to_string(),
                country: country.to_string(),
            },
        );
        self
    }

    pub fn with_ip_location(self, city: &str, country: &str) -> Self {
        *self.ip_place.lock().unwrap() = Some(Place {
            latitude: -37.81,
            longitude: 144.96,
            name: city.to_string(),
            country: country.to_string(),
        });
        self
    }

    /// Holds every forecast until `parties` forecasts are waiting.
    pub fn with_gate(mut self, parties: usize) -> Self {
        self.gate = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }

    pub fn ip_calls(&self) -> usize {
        self.ip_calls.load(Ordering::SeqCst)
    }

    pub fn forecast_calls(&self) -> usize {
        self.forecast_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn geocode(&self, city: &str, _country: &str) -> Result<Place> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        self.places
            .lock()
            .unwrap()
            .get(city)
            .cloned()
            .ok_or_else(|| PortalError::LocationNotFound(city.to_string()))
    }

    async fn locate_by_ip(&self) -> Result<Place> {
        self.ip_calls.fetch_add(1, Ordering::SeqCst);
        self.ip_place
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| PortalError::Geolocation("fail".to_string()))
    }

    async fn current_weather(&self, _latitude: f64, _longitude: f64) -> Result<WeatherData> {
        let call = self.forecast_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(gate) = &self.gate {
            gate.wait().await;
        }
        Ok(WeatherData {
            temperature: call as f64,
            weathercode: 1,
            ..Default::default()
        })
    }
}
