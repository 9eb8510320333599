//! Presentation layer - PhaseView and the widgets it renders

pub mod components;
pub mod dom;
pub mod errors;
pub mod handlers;
pub mod helpers;
pub mod layout;
pub mod state;
pub mod views;

pub use errors::{IntegrationError, PhaseError};
pub use views::PhaseView;
