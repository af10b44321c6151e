//! Command-line and environment configuration.

use crate::board::domain::{ColumnSet, ColumnSetError};
use camino::Utf8PathBuf;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 3456;

/// Dashboard assets shipped with the crate, independent of the working
/// directory.
pub const DEFAULT_ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/dashboard");

/// Server configuration.
///
/// Every option can also be set through its `KANBAN_*` environment
/// variable.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "mdboard", version, about = "Kanban board synced with a markdown file")]
pub struct ServerConfig {
    /// Markdown file holding the board.
    #[arg(env = "KANBAN_FILE", default_value = "PROJECTS.md")]
    pub board_file: Utf8PathBuf,

    /// Address to bind.
    #[arg(long, env = "KANBAN_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "KANBAN_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Ordered, comma-separated column names.
    #[arg(
        long,
        env = "KANBAN_COLUMNS",
        value_delimiter = ',',
        default_value = "Backlog,Active,Done"
    )]
    pub columns: Vec<String>,

    /// Directory holding the dashboard assets.
    #[arg(long, env = "KANBAN_ASSETS", default_value = DEFAULT_ASSETS)]
    pub assets: Utf8PathBuf,
}

impl ServerConfig {
    /// Validates the configured column names.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnSetError`] when the list is empty, holds a blank
    /// name, or repeats a name.
    pub fn column_set(&self) -> Result<ColumnSet, ColumnSetError> {
        ColumnSet::new(&self.columns)
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
