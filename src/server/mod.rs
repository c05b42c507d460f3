//! HTTP endpoint.
//!
//! Provides two routes:
//! - `/api/check-hsts?url=<target>` - HSTS preload eligibility as JSON
//! - `/health` - liveness probe
//!
//! The handler holds no state between requests beyond the shared HTTP client.

mod handlers;
pub mod pipeline;
mod types;

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::{Config, CHECK_HSTS_ROUTE, HEALTH_ROUTE};
use crate::error_handling::ServerError;
use crate::fetch::HstsChecker;
use handlers::{check_hsts_handler, health_handler};
pub use types::{ApiResponse, AppState, ErrorBody, ResponseBody, VerdictBody};

/// Builds the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CHECK_HSTS_ROUTE, get(check_hsts_handler))
        .route(HEALTH_ROUTE, get(health_handler))
        .with_state(state)
}

/// Binds a listener.
///
/// # Errors
///
/// Returns `ServerError::Bind` if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns `ServerError::Serve` if the server stops with an I/O error.
pub async fn serve<S>(listener: TcpListener, state: AppState, shutdown: S) -> Result<(), ServerError>
where
    S: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("HSTS check server listening on http://{}/", addr);
        log::info!("  - Check: http://{}{}?url=<target>", addr, CHECK_HSTS_ROUTE);
        log::info!("  - Health: http://{}{}", addr, HEALTH_ROUTE);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Creates the checker, binds and serves until Ctrl-C.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let checker = HstsChecker::new(config).context("Failed to initialize HTTP client")?;
    let state = AppState::new(checker, &config.cors_origin)?;
    let listener = bind(config.socket_addr()).await?;

    serve(listener, state, shutdown_signal()).await?;
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
