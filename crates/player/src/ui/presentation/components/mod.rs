//! Widgets cloned from host templates

pub mod templates;
pub mod widgets;

pub use templates::TemplateLibrary;
