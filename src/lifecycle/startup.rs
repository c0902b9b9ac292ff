//! Startup orchestration.
//!
//! # Responsibilities
//! - Build application state from a validated configuration
//! - Bind the listener
//! - Run the server until a stop signal arrives
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_listener;

/// Serve `config` until SIGINT/SIGTERM.
pub async fn run(config: ServiceConfig) -> Result<()> {
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        upstream = %server.config().upstream.base_url,
        upstream_timeout_ms = server.config().upstream.timeout_ms,
        "Listening for connections"
    );

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    let signals = spawn_signal_listener(shutdown.clone());

    server.run(listener, server_shutdown).await?;
    signals.abort();

    Ok(())
}
