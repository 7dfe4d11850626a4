//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Resolve the listen address from configuration.
pub fn listen_addr(config: &AppConfig) -> Result<SocketAddr, ServerError> {
    Ok(format!("{}:{}", config.http.host, config.http.port).parse()?)
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    serve_with_handle(app, config, Handle::new()).await
}

/// Start the HTTP server, controlled through a caller-provided handle.
///
/// `handle.listening()` resolves to the bound address (useful with port 0),
/// and `handle.graceful_shutdown` stops the server. SIGTERM/SIGINT still
/// trigger a graceful shutdown as well.
pub async fn serve_with_handle(
    app: Router,
    config: &AppConfig,
    handle: Handle,
) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_grace_seconds),
    );

    // Log once the socket is actually bound
    let listening = handle.clone();
    tokio::spawn(async move {
        if let Some(addr) = listening.listening().await {
            tracing::info!(%addr, port = addr.port(), "Server listening");
        }
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_default() {
        let addr = listen_addr(&AppConfig::default()).unwrap();
        assert_eq!(addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_listen_addr_invalid_host() {
        let mut config = AppConfig::default();
        config.http.host = "not a host".to_string();
        assert!(matches!(listen_addr(&config), Err(ServerError::Address(_))));
    }
}
