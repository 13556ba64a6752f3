//! HTTP server lifecycle — bind, spawn, and shut down the axum server.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel. The handle carries session metadata for logging; the server
//! itself runs detached so callers (the binary, tests) stay free.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::api::router::app_router;
use crate::api::types::ApiContext;

/// Session metadata for a running server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running server.
pub struct ServerHandle {
    pub session: ApiSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ServerHandle {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("HTTP server shutdown signal sent");
        }
    }
}

/// Start the HTTP server on the given address.
///
/// Binds (an ephemeral port is fine), builds the full router, and spawns
/// the axum server in a background tokio task with graceful shutdown.
pub async fn start_server(ctx: ApiContext, addr: SocketAddr) -> Result<ServerHandle, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind HTTP server: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    tracing::info!(%addr, "HTTP server binding");

    let app = app_router(ctx);

    let session = ApiSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("HTTP server received shutdown signal");
        };

        tracing::info!(%addr, "HTTP server started");

        // ConnectInfo feeds the per-IP rate limiter
        if let Err(e) = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal)
        .await
        {
            tracing::error!("HTTP server error: {e}");
        }

        tracing::info!("HTTP server stopped");
    });

    Ok(ServerHandle {
        session,
        shutdown_tx: Some(shutdown_tx),
    })
}
