//! Outbound ports - Interfaces for external collaborators
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, so PhaseView never depends on a concrete page or transport.

pub mod game_action_port;
pub mod host_document_port;
pub mod phase_events;

pub use game_action_port::{ActionError, GameActionPort};
pub use host_document_port::{DocumentError, HostDocumentPort};
pub use phase_events::PhaseEvent;

#[cfg(test)]
pub use game_action_port::MockGameActionPort;
