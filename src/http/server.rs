//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Start the HTTP server on `addr`.
///
/// Blocks until the server stops, which only happens once `handle` is told to
/// shut down. The bound address is available through `Handle::listening`,
/// which matters when `addr` asks for an ephemeral port.
pub async fn start_server(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::debug!(%addr, "Binding HTTP listener");

    // Report the real port once bound, since `addr` may ask for port 0
    let listening = handle.clone();
    tokio::spawn(async move {
        if let Some(bound) = listening.listening().await {
            tracing::info!(addr = %bound, "Application running on port {}", bound.port());
        }
    });

    // Accept errors are retried internally, so anything surfacing here is a bind failure
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let err = start_server(Router::new(), addr, Handle::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
