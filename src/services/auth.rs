//! Session handling and the cached user profile.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::backend::{BackendClient, FetchRequest};
use crate::cache::{CacheKey, SharedCache};
use crate::error::{PortalError, Result};
use crate::models::UserInfo;

const LOGIN_PATH: &str = "/seqta/student/login?";
const PHOTO_PATH: &str = "/seqta/student/photo/get";

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadUserInfoOptions {
    /// Skip the school photo and bypass any cached profile
    pub disable_school_picture: bool,
}

#[derive(Clone)]
pub struct AuthService {
    cache: SharedCache,
    backend: BackendClient,
}

impl AuthService {
    pub fn new(cache: SharedCache, backend: BackendClient) -> Self {
        Self { cache, backend }
    }

    pub async fn check_session(&self) -> Result<bool> {
        self.backend.check_session_exists().await
    }

    /// Opens the login window. An empty URL does nothing.
    pub async fn start_login(&self, portal_url: &str) -> Result<()> {
        if portal_url.is_empty() {
            return Ok(());
        }
        self.backend.create_login_window(portal_url).await
    }

    /// Ends the session and drops the cached profile of the old identity.
    pub async fn logout(&self) -> Result<bool> {
        let logged_out = self.backend.logout().await?;
        self.cache.write().await.delete(&CacheKey::UserInfo);
        info!(logged_out, "session ended, cached user info invalidated");
        Ok(logged_out)
    }

    /// Returns the signed-in user's profile, from cache when possible.
    ///
    /// Failures are logged and reported as `None`; nothing is cached for a
    /// failed load, so the next call tries again.
    pub async fn load_user_info(&self, options: LoadUserInfoOptions) -> Option<Arc<UserInfo>> {
        if options.disable_school_picture {
            self.cache.write().await.delete(&CacheKey::UserInfo);
        }

        let cached = self.cache.write().await.get(&CacheKey::UserInfo);
        if let Some(info) = cached.and_then(|value| value.into_user_info()) {
            return Some(info);
        }

        match self.fetch_user_info(!options.disable_school_picture).await {
            Ok(info) => {
                let info = Arc::new(info);
                self.cache
                    .write()
                    .await
                    .set(CacheKey::UserInfo, info.clone().into(), None);
                Some(info)
            }
            Err(e) => {
                error!(error = %e, "Failed to load user info");
                None
            }
        }
    }

    async fn fetch_user_info(&self, include_picture: bool) -> Result<UserInfo> {
        let request = FetchRequest::post(LOGIN_PATH)
            .header("Content-Type", "application/json; charset=utf-8")
            .body(json!({}));
        let body = self.backend.fetch_api_data(&request).await?;

        let mut response: Value = serde_json::from_str(&body)?;
        let payload = response
            .get_mut("payload")
            .map(Value::take)
            .ok_or_else(|| PortalError::Decode("login response has no payload".to_string()))?;
        let mut info: UserInfo = serde_json::from_value(payload)?;

        if include_picture {
            let request = FetchRequest::get(PHOTO_PATH)
                .param("uuid", info.person_uuid.clone())
                .param("format", "low")
                .image();
            let photo = self.backend.fetch_api_data(&request).await?;
            info.profile_picture = Some(format!("data:image/png;base64,{}", photo));
        }

        debug!(user = %info.user_name, include_picture, "fetched user info");
        Ok(info)
    }

    pub async fn get_api_data(
        &self,
        url: &str,
        parameters: &HashMap<String, String>,
    ) -> Result<Value> {
        self.backend.get_api_data(url, parameters).await
    }

    pub async fn post_api_data(
        &self,
        url: &str,
        data: &HashMap<String, String>,
    ) -> Result<Value> {
        self.backend.post_api_data(url, data).await
    }
}
