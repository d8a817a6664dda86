//! Native Backend Module
//!
//! Privileged work (session storage, portal HTTP, settings persistence) lives
//! in a separate native process. Everything here talks to it through one call
//! contract: a command name plus a JSON argument map in, a JSON value or an
//! error out.

mod client;
mod http;
mod request;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;

pub use client::BackendClient;
pub use http::HttpBackend;
pub use request::{FetchRequest, RequestMethod};

/// Argument map sent with a command.
pub type CommandArgs = Map<String, Value>;

/// Request/response bridge to the native backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Runs `command` with `args` and returns its JSON result.
    async fn invoke(&self, command: &str, args: CommandArgs) -> Result<Value>;
}

/// Command names understood by the native backend.
pub mod commands {
    pub const CHECK_SESSION_EXISTS: &str = "check_session_exists";
    pub const CREATE_LOGIN_WINDOW: &str = "create_login_window";
    pub const LOGOUT: &str = "logout";
    pub const GET_SETTINGS: &str = "get_settings";
    pub const SAVE_SETTINGS: &str = "save_settings";
    pub const FETCH_API_DATA: &str = "fetch_api_data";
    pub const GET_API_DATA: &str = "get_api_data";
    pub const POST_API_DATA: &str = "post_api_data";
    pub const GET_RSS_FEED: &str = "get_rss_feed";
    pub const OPEN_URL: &str = "open_url";
}
