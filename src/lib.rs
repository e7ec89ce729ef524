//! rolls: a greeting and health-check HTTP service.
//!
//! Serves `GET /` with a JSON greeting carrying the hostname and current time,
//! and `GET /health` as a liveness probe.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
