//! HTTP server lifecycle.
//!
//! Binds the listener, serves the router until shutdown, and turns SIGINT or
//! SIGTERM into a graceful shutdown that drains in-flight requests. Plain HTTP
//! only.

mod server;
mod shutdown;

pub use axum_server::Handle;
pub use server::{start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
