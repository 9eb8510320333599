//! Views

pub mod phase_view;

pub use phase_view::PhaseView;
