use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::io;

use crate::config::INTERNAL_ERROR_MESSAGE;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Hostname lookup failed: {0}")]
    Hostname(#[from] io::Error),
}

/// JSON body sent for failed requests.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the logs; clients only see a generic message
        tracing::error!(error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: INTERNAL_ERROR_MESSAGE,
            }),
        )
            .into_response()
    }
}
