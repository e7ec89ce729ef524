//! Health check endpoint for container orchestration.
//!
//! A liveness probe: returns 200 with a constant body whenever the process can
//! answer HTTP at all.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTHY_STATUS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY_STATUS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body_is_exact() {
        let Json(body) = health().await;
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"healthy"}"#
        );
    }
}
