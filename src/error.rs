//! Error types for the portal client
//!
//! Cache operations never fail; these errors come from the native backend,
//! third-party HTTP services and request validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Portal Error Enum ==
#[derive(Error, Debug)]
pub enum PortalError {
    /// The native backend rejected a command
    #[error("Backend command '{command}' failed: {message}")]
    Backend { command: String, message: String },

    /// Transport failure talking to the backend or a third-party service
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Geocoding returned no match
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// IP geolocation did not report success
    #[error("IP geolocation failed: {0}")]
    Geolocation(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PortalError {
    pub fn backend(command: impl Into<String>, message: impl Into<String>) -> Self {
        PortalError::Backend {
            command: command.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Decode(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = match &self {
            PortalError::Backend { .. } | PortalError::Http(_) | PortalError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            PortalError::LocationNotFound(_) => StatusCode::NOT_FOUND,
            PortalError::Geolocation(_) => StatusCode::BAD_GATEWAY,
            PortalError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, PortalError>;
