//! Runs the mdboard HTTP server.

use clap::Parser;
use mdboard::{config::ServerConfig, server, telemetry};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    telemetry::init()?;
    server::run(config).await?;
    Ok(())
}
