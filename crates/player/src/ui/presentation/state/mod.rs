//! Presentation state

pub mod phase_state;

pub use phase_state::Phase;
