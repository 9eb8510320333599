//! Unified error type for the domain layer
//!
//! Domain constructors and parsers return `DomainError` so adapters never have
//! to fall back to `String` or `anyhow` for invariant violations.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a proposal number of zero)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A wire tag did not name a known value
    #[error("Unknown {kind}: {value}")]
    UnknownTag { kind: &'static str, value: String },

    /// An index fell outside the collection it addresses
    #[error("{what} index {index} is out of range (len {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if mission_size == 0 {
    ///     return Err(DomainError::validation("Mission size cannot be zero"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unknown-tag error
    pub fn unknown_tag(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownTag {
            kind,
            value: value.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange { what, index, len }
    }
}
