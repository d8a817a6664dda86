//! API Module
//!
//! HTTP handlers and routing for the portal client.
//!
//! # Endpoints
//! - `GET /health`, `GET /stats`
//! - `GET /session`, `POST /login`, `POST /logout`
//! - `GET /user-info`
//! - `GET /weather`, `GET /weather/city`, `GET /weather/ip`
//! - `GET|PUT /settings/weather`
//! - `DELETE /cache`, `DELETE /cache/:key`, `PUT /cache/default-ttl`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
