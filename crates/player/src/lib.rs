//! THavalon player crate.
//!
//! PhaseView renders game phase events into a host document and forwards
//! the local player's choices through `GameActionPort`. Adapters for an
//! in-memory document and a channel-backed command bus live in
//! `infrastructure`.

pub mod config;
pub mod harness;
pub mod infrastructure;
pub mod ports;
pub mod session_types;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::PlayerConfig;
pub use presentation::{IntegrationError, PhaseError, PhaseView};
pub use session_types::SessionContext;
