use async_trait::async_trait;
use portal_cache::backend::{Backend, CommandArgs};
use portal_cache::error::{PortalError, Result};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const LOGIN_PATH: &str = "/seqta/student/login?";
pub const PHOTO_PATH: &str = "/seqta/student/photo/get";

/// In-memory backend that answers from canned replies and records calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBackend {
    replies: Arc<Mutex<HashMap<String, Value>>>,
    fetch_replies: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<(String, CommandArgs)>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves a portal login for `uuid` and a tiny photo.
    pub fn with_user(self, uuid: &str, user_name: &str) -> Self {
        let login = json!({
            "payload": {
                "clientIP": "10.0.0.2",
                "email": format!("{}@school.edu", user_name),
                "id": 7,
                "personUUID": uuid,
                "userName": user_name,
                "type": "student"
            }
        });
        self.set_fetch_reply(LOGIN_PATH, &login.to_string());
        self.set_fetch_reply(PHOTO_PATH, "UE5H");
        self
    }

    pub fn with_reply(self, command: &str, reply: Value) -> Self {
        self.replies.lock().unwrap().insert(command.to_string(), reply);
        self
    }

    pub fn set_fetch_reply(&self, url: &str, body: &str) {
        self.fetch_replies
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    /// Makes every later call to `command` fail.
    pub fn fail(&self, command: &str) {
        self.failing.lock().unwrap().insert(command.to_string());
    }

    pub fn recover(&self, command: &str) {
        self.failing.lock().unwrap().remove(command);
    }

    pub fn call_count(&self, command: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == command)
            .count()
    }

    /// Number of `fetch_api_data` calls for `url`.
    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, args)| name == "fetch_api_data" && args["url"] == url)
            .count()
    }

    pub fn last_args(&self, command: &str) -> Option<CommandArgs> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(name, _)| name == command)
            .map(|(_, args)| args.clone())
    }

    pub fn settings(&self) -> Value {
        self.replies
            .lock()
            .unwrap()
            .get("get_settings")
            .cloned()
            .unwrap_or(Value::Null)
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn invoke(&self, command: &str, args: CommandArgs) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), args.clone()));

        if self.failing.lock().unwrap().contains(command) {
            return Err(PortalError::backend(command, "mock failure"));
        }

        match command {
            "fetch_api_data" => {
                let url = args["url"].as_str().unwrap_or_default();
                self.fetch_replies
                    .lock()
                    .unwrap()
                    .get(url)
                    .map(|body| Value::String(body.clone()))
                    .ok_or_else(|| PortalError::backend(command, format!("no reply for {}", url)))
            }
            "save_settings" => {
                self.replies
                    .lock()
                    .unwrap()
                    .insert("get_settings".to_string(), args["newSettings"].clone());
                Ok(Value::Null)
            }
            _ => Ok(self
                .replies
                .lock()
                .unwrap()
                .get(command)
                .cloned()
                .unwrap_or(Value::Null)),
        }
    }
}
