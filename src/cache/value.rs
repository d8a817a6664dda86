//! Cached payloads
//!
//! The cache holds several payload shapes under one map, so values are a
//! tagged union. Payloads sit behind `Arc` so a hit hands back the same
//! record that was stored.

use std::sync::Arc;

use crate::models::{UserInfo, WeatherData};

#[derive(Debug, Clone)]
pub enum CachedValue {
    UserInfo(Arc<UserInfo>),
    Weather(Arc<WeatherData>),
}

impl CachedValue {
    pub fn into_user_info(self) -> Option<Arc<UserInfo>> {
        match self {
            CachedValue::UserInfo(info) => Some(info),
            _ => None,
        }
    }

    pub fn into_weather(self) -> Option<Arc<WeatherData>> {
        match self {
            CachedValue::Weather(weather) => Some(weather),
            _ => None,
        }
    }
}

impl From<Arc<UserInfo>> for CachedValue {
    fn from(info: Arc<UserInfo>) -> Self {
        CachedValue::UserInfo(info)
    }
}

impl From<Arc<WeatherData>> for CachedValue {
    fn from(weather: Arc<WeatherData>) -> Self {
        CachedValue::Weather(weather)
    }
}
