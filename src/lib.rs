//! mdboard: a kanban board synchronised with a markdown checklist file.
//!
//! The board's canonical form is a hand-editable markdown file. The server
//! exposes it to a browser dashboard as JSON and writes every accepted edit
//! back to the file.
//!
//! # Architecture
//!
//! mdboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board model, mutators, and markdown transcoding
//! - **Ports**: Abstract trait interfaces for the board source
//! - **Adapters**: Concrete implementations of ports (file, memory)
//!
//! # Modules
//!
//! - [`board`]: Board model, transcoding, and the board store
//! - [`config`]: Command-line and environment configuration
//! - [`server`]: HTTP API and dashboard hosting
//! - [`telemetry`]: Logging setup

pub mod board;
pub mod config;
pub mod server;
pub mod telemetry;
