//! Greeting endpoint.
//!
//! Answers `GET /` with a fixed message, the machine's hostname and the
//! current UTC time. Hostname and time are read on every request.

use axum::{extract::State, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::GREETING_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub hostname: String,
    pub timestamp: String,
}

impl GreetingResponse {
    pub fn new(hostname: String, now: DateTime<Utc>) -> Self {
        Self {
            message: GREETING_MESSAGE,
            hostname,
            timestamp: format_timestamp(now),
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Greeting handler.
pub async fn greet(State(state): State<AppState>) -> Result<Json<GreetingResponse>, AppError> {
    // Non-UTF-8 bytes become U+FFFD; only a failed lookup is an error
    let hostname = (state.hostname)()?.to_string_lossy().into_owned();

    tracing::debug!(%hostname, "Serving greeting");

    Ok(Json(GreetingResponse::new(hostname, Utc::now())))
}
