//! Third-party lookups behind the weather feature: geocoding, IP
//! geolocation and the current-conditions forecast.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::models::WeatherData;

/// A resolved place.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Best match for `city`, optionally narrowed to an ISO country code.
    async fn geocode(&self, city: &str, country: &str) -> Result<Place>;

    /// Place of the caller's public IP address.
    async fn locate_by_ip(&self) -> Result<Place>;

    /// Current conditions at a coordinate. `location` and `country` are left
    /// empty for the caller to fill in.
    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherData>;
}

// == Open-Meteo ==
/// Open-Meteo geocoding and forecast, with ip-api for IP geolocation.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    client: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
    ip_geolocation_url: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct IpLocation {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: WeatherData,
}

impl OpenMeteoProvider {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            ip_geolocation_url: config.ip_geolocation_url.clone(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn geocode(&self, city: &str, country: &str) -> Result<Place> {
        let response: GeocodingResponse = self
            .client
            .get(&self.geocoding_url)
            .query(&[
                ("name", city),
                ("countryCode", country),
                ("count", "10"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let first = response
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| PortalError::LocationNotFound(city.to_string()))?;

        Ok(Place {
            latitude: first.latitude,
            longitude: first.longitude,
            name: first.name,
            country: first.country,
        })
    }

    async fn locate_by_ip(&self) -> Result<Place> {
        let location: IpLocation = self
            .client
            .get(&self.ip_geolocation_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if location.status != "success" {
            return Err(PortalError::Geolocation(
                location.message.unwrap_or(location.status),
            ));
        }

        Ok(Place {
            latitude: location.lat,
            longitude: location.lon,
            name: location.city,
            country: location.country,
        })
    }

    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherData> {
        let response: ForecastResponse = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.current_weather)
    }
}
