//! HTTP route handlers.
//!
//! Two routes: the greeting at `/` and the liveness probe at `/health`. Both
//! are marked `no-store` since their bodies are either per-call or must reflect
//! the live process. Unknown paths fall through to axum's default 404.
//!
//! Every request passes through the request ID middleware, which wraps it in a
//! tracing span and echoes the ID back in a response header.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with both routes and their headers.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(greeting::greet))
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(api_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
