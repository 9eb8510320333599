//! Presentation error taxonomy
//!
//! - `IntegrationError`: the host page is malformed. Fatal, returned from
//!   `PhaseView::new`.
//! - `PhaseError`: one event or interaction was rejected. The affected
//!   regions keep their last valid state and the session carries on.

use thiserror::Error;

use crate::ports::outbound::{ActionError, DocumentError};
use crate::presentation::state::Phase;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegrationError {
    #[error("Document is missing the {name} mount point (#{id})")]
    MissingMountPoint { name: &'static str, id: String },

    #[error("Document is missing the {name} template (#{id})")]
    MissingTemplate { name: &'static str, id: String },

    #[error("The {name} template (#{id}) has no {missing}")]
    MalformedTemplate {
        name: &'static str,
        id: String,
        missing: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhaseError {
    /// The event violates a handler precondition
    #[error("Invalid {event} event: {reason}")]
    InvalidEvent { event: &'static str, reason: String },

    /// The event cannot follow the current phase
    #[error("{event} is not legal while {phase}")]
    IllegalTransition { event: &'static str, phase: Phase },

    /// The player interacted with a widget that is not on screen
    #[error("The {widget} is not available: {reason}")]
    WidgetUnavailable {
        widget: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Could not send game action: {0}")]
    Action(#[from] ActionError),
}

impl PhaseError {
    pub fn invalid(event: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEvent {
            event,
            reason: reason.into(),
        }
    }

    pub fn unavailable(widget: &'static str, reason: impl Into<String>) -> Self {
        Self::WidgetUnavailable {
            widget,
            reason: reason.into(),
        }
    }
}
