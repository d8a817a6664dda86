//! Portal Cache - read-through caching for a school-portal desktop client
//!
//! Provides an in-memory TTL cache with lazy expiry, and the consumers that
//! cache user-profile and weather lookups behind it.

pub mod api;
pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use api::AppState;
pub use config::Config;
pub use error::{PortalError, Result};
