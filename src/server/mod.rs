//! HTTP surface: JSON board API plus dashboard hosting.

pub mod dto;
mod error;
mod routes;

pub use error::{ApiError, ServeError};
pub use routes::{AppState, api_router, router};

use crate::{
    board::{adapters::FileBoardSource, services::BoardStore},
    config::ServerConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Loads the board file and serves the dashboard until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServeError`] when the configuration is invalid, the board file
/// cannot be read, the listener cannot be bound, or the server fails.
pub async fn run(config: ServerConfig) -> Result<(), ServeError> {
    let columns = config.column_set()?;
    let source = FileBoardSource::open(&config.board_file).map_err(ServeError::BoardLocation)?;
    let store = Arc::new(BoardStore::new(Arc::new(source), columns));
    store.load().await?;

    let column_order = store.columns().names().join(" -> ");
    let app = router(
        AppState::new(Arc::clone(&store), config.board_file.to_string()),
        &config.assets,
    );

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .map_err(ServeError::Bind)?;
    let addr = listener.local_addr().map_err(ServeError::Bind)?;
    info!(%addr, "kanban server listening");
    info!(file = %config.board_file, "syncing board file");
    info!(columns = %column_order, "column order");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
