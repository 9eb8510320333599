//! Mission cards and mission outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A card played on a mission.
///
/// Tags the client does not know are preserved in `Unrecognized` and shown
/// literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Card {
    Success,
    Fail,
    Reverse,
    Unrecognized(String),
}

impl Card {
    /// Parse a wire tag, keeping unknown tags instead of failing
    pub fn from_tag(tag: &str) -> Self {
        tag.parse()
            .unwrap_or_else(|_| Card::Unrecognized(tag.to_string()))
    }

    /// Display name used in popovers and confirmations
    pub fn display_name(&self) -> &str {
        match self {
            Card::Success => "Success",
            Card::Fail => "Fail",
            Card::Reverse => "Reverse",
            Card::Unrecognized(tag) => tag,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Card::Success),
            "fail" => Ok(Card::Fail),
            "reverse" => Ok(Card::Reverse),
            _ => Err(DomainError::unknown_tag("card", s)),
        }
    }
}

/// Outcome of a mission, as decided by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionResult {
    Pass,
    Fail,
}

impl fmt::Display for MissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionResult::Pass => write!(f, "Pass"),
            MissionResult::Fail => write!(f, "Fail"),
        }
    }
}
