//! Presentation helpers

pub mod text;
