//! Proposal votes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A single player's vote on a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    Upvote,
    Downvote,
}

impl Vote {
    pub fn is_upvote(&self) -> bool {
        matches!(self, Vote::Upvote)
    }

    /// Past-tense verb used in player-facing sentences ("upvoted")
    pub fn past_tense(&self) -> &'static str {
        match self {
            Vote::Upvote => "upvoted",
            Vote::Downvote => "downvoted",
        }
    }
}

impl From<bool> for Vote {
    fn from(upvote: bool) -> Self {
        if upvote {
            Vote::Upvote
        } else {
            Vote::Downvote
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vote::Upvote => write!(f, "Upvote"),
            Vote::Downvote => write!(f, "Downvote"),
        }
    }
}

impl std::str::FromStr for Vote {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upvote" | "up" => Ok(Vote::Upvote),
            "downvote" | "down" => Ok(Vote::Downvote),
            _ => Err(DomainError::unknown_tag("vote", s)),
        }
    }
}

/// A vote as it appears in a prior-vote tally.
///
/// Tallies come from the server as numeric codes; anything outside the
/// two-valued domain is kept verbatim so it can still be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalliedVote {
    Upvote,
    Downvote,
    Unrecognized(String),
}

impl TalliedVote {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => TalliedVote::Upvote,
            0 => TalliedVote::Downvote,
            other => TalliedVote::Unrecognized(other.to_string()),
        }
    }
}

impl From<Vote> for TalliedVote {
    fn from(vote: Vote) -> Self {
        match vote {
            Vote::Upvote => TalliedVote::Upvote,
            Vote::Downvote => TalliedVote::Downvote,
        }
    }
}

impl fmt::Display for TalliedVote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalliedVote::Upvote => write!(f, "Upvoted"),
            TalliedVote::Downvote => write!(f, "Downvoted"),
            TalliedVote::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}
