//! Typed wrappers over the backend command set.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, error};

use super::{commands, Backend, CommandArgs, FetchRequest};
use crate::error::{PortalError, Result};

/// Cheaply cloneable handle that turns typed calls into backend commands.
#[derive(Clone)]
pub struct BackendClient {
    backend: Arc<dyn Backend>,
}

impl BackendClient {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    async fn call(&self, command: &str, args: CommandArgs) -> Result<Value> {
        debug!(command, "invoking backend command");
        self.backend.invoke(command, args).await.inspect_err(|e| {
            error!(command, error = %e, "backend command failed");
        })
    }

    /// Whether a stored portal session exists.
    pub async fn check_session_exists(&self) -> Result<bool> {
        let value = self
            .call(commands::CHECK_SESSION_EXISTS, CommandArgs::new())
            .await?;
        expect_bool(commands::CHECK_SESSION_EXISTS, value)
    }

    /// Opens the portal login window at `url`.
    pub async fn create_login_window(&self, url: &str) -> Result<()> {
        self.call(commands::CREATE_LOGIN_WINDOW, args([("url", json!(url))]))
            .await?;
        Ok(())
    }

    /// Ends the stored session. Returns the backend's success flag.
    pub async fn logout(&self) -> Result<bool> {
        let value = self.call(commands::LOGOUT, CommandArgs::new()).await?;
        expect_bool(commands::LOGOUT, value)
    }

    /// Full persisted settings document.
    pub async fn get_settings(&self) -> Result<Value> {
        self.call(commands::GET_SETTINGS, CommandArgs::new()).await
    }

    pub async fn save_settings(&self, settings: Value) -> Result<()> {
        self.call(commands::SAVE_SETTINGS, args([("newSettings", settings)]))
            .await?;
        Ok(())
    }

    /// Proxies a portal request. The response body comes back as text, or
    /// base64 when the request is flagged as an image.
    pub async fn fetch_api_data(&self, request: &FetchRequest) -> Result<String> {
        let value = self.call(commands::FETCH_API_DATA, request.to_args()).await?;
        match value {
            Value::String(body) => Ok(body),
            other => Err(PortalError::Decode(format!(
                "{} returned {} instead of a string",
                commands::FETCH_API_DATA,
                other
            ))),
        }
    }

    pub async fn get_api_data(
        &self,
        url: &str,
        parameters: &HashMap<String, String>,
    ) -> Result<Value> {
        self.call(
            commands::GET_API_DATA,
            args([("url", json!(url)), ("parameters", json!(parameters))]),
        )
        .await
    }

    pub async fn post_api_data(
        &self,
        url: &str,
        data: &HashMap<String, String>,
    ) -> Result<Value> {
        self.call(
            commands::POST_API_DATA,
            args([("url", json!(url)), ("data", json!(data))]),
        )
        .await
    }

    /// Parsed RSS channel for `feed`.
    pub async fn get_rss_feed(&self, feed: &str) -> Result<Value> {
        self.call(commands::GET_RSS_FEED, args([("feed", json!(feed))]))
            .await
    }

    /// Opens `url` in the system browser.
    pub async fn open_url(&self, url: &str) -> Result<()> {
        self.call(commands::OPEN_URL, args([("url", json!(url))]))
            .await?;
        Ok(())
    }
}

fn args<const N: usize>(pairs: [(&str, Value); N]) -> CommandArgs {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn expect_bool(command: &str, value: Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        PortalError::Decode(format!("{} returned {} instead of a bool", command, value))
    })
}
