//! Markdown-backed task board.
//!
//! The board context converts a markdown checklist file into a structured
//! board and back, and owns the canonical in-memory copy exchanged with
//! the browser client. It follows hexagonal architecture:
//!
//! - Domain types and pure mutators in [`domain`]
//! - Markdown parsing and rendering in [`transcoder`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod transcoder;

#[cfg(test)]
mod tests;
