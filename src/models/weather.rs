//! Weather snapshot and the settings that choose how it is looked up.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current conditions for a place.
///
/// The forecast service's `current_weather` object is flattened in next to
/// the resolved place name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub temperature: f64,
    pub weathercode: i64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windspeed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winddirection: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Weather-related subset of the persisted client settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    pub weather_enabled: bool,
    pub force_use_location: bool,
    pub weather_city: String,
    pub weather_country: String,
}

impl WeatherSettings {
    /// Extracts the weather fields from a full settings document. Missing or
    /// mistyped fields fall back to their defaults.
    pub fn from_settings(settings: &Value) -> Self {
        let flag = |name: &str| settings.get(name).and_then(Value::as_bool).unwrap_or(false);
        let text = |name: &str| {
            settings
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            weather_enabled: flag("weather_enabled"),
            force_use_location: flag("force_use_location"),
            weather_city: text("weather_city"),
            weather_country: text("weather_country"),
        }
    }

    /// Writes the weather fields into a settings document, leaving every
    /// other field untouched.
    pub fn apply_to(&self, settings: &mut Value) {
        if !settings.is_object() {
            *settings = Value::Object(Map::new());
        }
        if let Value::Object(map) = settings {
            map.insert("weather_enabled".into(), self.weather_enabled.into());
            map.insert("force_use_location".into(), self.force_use_location.into());
            map.insert("weather_city".into(), self.weather_city.clone().into());
            map.insert("weather_country".into(), self.weather_country.clone().into());
        }
    }
}
