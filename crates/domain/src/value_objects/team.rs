//! Team allegiance

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// The side a role plays for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Good,
    Evil,
}

impl Team {
    /// Bracketed tag shown after the role name, e.g. `[GOOD]`
    pub fn tag(&self) -> &'static str {
        match self {
            Team::Good => "[GOOD]",
            Team::Evil => "[EVIL]",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Good => write!(f, "Good"),
            Team::Evil => write!(f, "Evil"),
        }
    }
}

impl std::str::FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(Team::Good),
            "evil" => Ok(Team::Evil),
            _ => Err(DomainError::unknown_tag("team", s)),
        }
    }
}
