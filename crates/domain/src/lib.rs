//! THavalon Domain - the game vocabulary the player client renders.
//!
//! Everything here is pure data plus invariants. Game legality lives on the
//! server; these types only describe what the server reports.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{CardCounts, MissionRecord, Proposal, RoleInfo, TallyEntry, VoteTally};
pub use error::DomainError;
pub use value_objects::{Card, MissionResult, TalliedVote, Team, Vote};

/// Players are identified by display name, unique within a game
pub type PlayerName = String;
