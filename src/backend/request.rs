//! Portal fetch requests proxied through the backend.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

use super::CommandArgs;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

/// A portal request for the `fetch_api_data` command.
///
/// Relative URLs are resolved by the backend against the signed-in
/// session's portal.
#[derive(Debug, Clone, Default)]
pub struct FetchRequest {
    pub url: String,
    pub method: RequestMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
    pub parameters: HashMap<String, String>,
    /// Return the response bytes base64-encoded instead of as text
    pub is_image: bool,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: RequestMethod::Post,
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn image(mut self) -> Self {
        self.is_image = true;
        self
    }

    /// Argument map in the shape the backend command expects.
    pub fn to_args(&self) -> CommandArgs {
        let mut args = CommandArgs::new();
        args.insert("url".into(), json!(self.url));
        args.insert("method".into(), json!(self.method));
        args.insert("headers".into(), json!(self.headers));
        args.insert("body".into(), self.body.clone().unwrap_or_else(|| json!({})));
        args.insert("parameters".into(), json!(self.parameters));
        args.insert("isImage".into(), json!(self.is_image));
        args.insert("returnUrl".into(), json!(false));
        args
    }
}
