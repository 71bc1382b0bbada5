//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: a listener that cannot bind is fatal
//! - A metrics exporter that cannot start is logged and skipped
//! - The listener binds last so traffic only arrives once the router exists

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the service described by `config` until a termination signal arrives.
pub async fn start(config: ServiceConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Listening for connections"
    );

    // Held for the lifetime of the server so the receiver never sees a
    // closed channel; only OS signals stop a server started here.
    let shutdown = Shutdown::new();
    HttpServer::new(config).run(listener, shutdown.subscribe()).await?;
    Ok(())
}
