//! HTTP transport for backend commands.
//!
//! Each command is a `POST {base_url}/invoke/{command}` with the argument map
//! as the JSON body. A 2xx reply carries the JSON result (an empty body means
//! `null`); anything else carries the error message as text.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{Backend, CommandArgs};
use crate::error::{PortalError, Result};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn command_url(&self, command: &str) -> String {
        format!("{}/invoke/{}", self.base_url, command)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn invoke(&self, command: &str, args: CommandArgs) -> Result<Value> {
        let response = self
            .client
            .post(self.command_url(command))
            .json(&args)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = String::from_utf8_lossy(&body).trim().to_string();
            let message = if message.is_empty() {
                status.to_string()
            } else {
                message
            };
            return Err(PortalError::backend(command, message));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
