//! HTTP service for Matelas layouts.
//!
//! Routes:
//!
//! - `GET /` - web form with a live canvas preview and CSV download
//! - `POST /calculate` - layout as JSON
//! - `POST /download_csv` - layout as a CSV attachment
//! - `GET /health` - liveness probe
//!
//! The routes share one [`LayoutService`] injected through [`router`].

mod error;
mod handlers;
mod page;

pub use error::ApiError;

use std::{future, io, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use log::{error, info};

use matelas::{LayoutService, MatelasError, config::ServerConfig};

/// Builds the application router around a layout service.
pub fn router(service: Arc<LayoutService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calculate", post(handlers::calculate))
        .route("/download_csv", post(handlers::download_csv))
        .route("/health", get(handlers::health))
        .with_state(service)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
///
/// Returns `MatelasError::Io` if the address cannot be bound or the server
/// stops with an I/O error.
pub async fn serve(service: Arc<LayoutService>, config: &ServerConfig) -> Result<(), MatelasError> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address; "Matelas server listening");
    info!(url:% = format!("http://{address}/"); "Web form available");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. If the signal cannot be installed it never
/// resolves, so the server keeps running until the process is killed.
async fn wait_for_signal(signal: impl Future<Output = io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!(err:% = err; "Failed to listen for shutdown signal");
            future::pending::<()>().await;
        }
    }
}
