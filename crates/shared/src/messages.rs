//! WebSocket message types for server-player communication
//!
//! The server sends `ServerMessage`s, the player answers with
//! `ClientMessage`s. Both are JSON objects discriminated by a `type` field.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming variants is a breaking change
//! - Unknown server message types deserialize to `Unknown`

use serde::{Deserialize, Serialize};
use thavalon_domain::{MissionResult, Team};

// =============================================================================
// Client Messages (Player → Server)
// =============================================================================

/// Messages from the player to the game server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Proposer submits the players picked for the mission.
    ///
    /// `within_cap` is the picker's own check that exactly `missionSize`
    /// players were selected; the server still decides legality.
    SubmitProposal {
        players: Vec<String>,
        within_cap: bool,
    },
    /// Player votes on the current proposal
    SubmitVote { upvote: bool },
    /// Player on a mission plays a card
    PlayCard { card: String },
}

// =============================================================================
// Server Messages (Server → Player)
// =============================================================================

/// A single attributed vote in `VotingResults`.
///
/// `vote` is a numeric code: 1 = upvote, 0 = downvote. Other codes are passed
/// through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEntry {
    pub player: String,
    pub vote: i64,
}

/// One finished mission in a `GameState` snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionSummary {
    pub mission: u8,
    pub result: MissionResult,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub cards: Vec<String>,
}

/// Messages from the game server to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Error message, usually when the player does something wrong
    Error { message: String },

    /// The local player's role and preformatted information text
    RoleInformation {
        role: String,
        team: Team,
        information: String,
    },

    /// Proposal order for the game
    PlayerOrder { players: Vec<String> },

    /// A new proposal round has begun
    NewProposal {
        proposer_index: usize,
        proposal_order: Vec<String>,
        proposal_number: u32,
        max_proposals: u32,
        mission_size: usize,
        /// Whether the force rule applies to this proposal
        #[serde(default)]
        force: bool,
        /// Players already on the proposal (reconnect resync)
        #[serde(default)]
        current_proposal: Vec<String>,
    },

    /// The proposer submitted a proposal
    ProposalMade {
        proposer: String,
        players: Vec<String>,
    },

    /// Players should vote on the latest proposal
    CommenceVoting { players: Vec<String> },

    /// The server recorded the local player's vote
    VoteReceived { upvote: bool },

    /// Results of the previous proposal vote
    VotingResults {
        #[serde(default)]
        obscured: bool,
        #[serde(default)]
        votes: Vec<VoteEntry>,
        #[serde(default)]
        upvotes: u32,
        #[serde(default)]
        downvotes: u32,
    },

    /// A mission is going
    MissionGoing { mission: u8, players: Vec<String> },

    /// The local player's card was recorded; others are still playing
    CardPlayed { card: String },

    /// A mission finished
    MissionResults {
        mission: u8,
        result: MissionResult,
        players: Vec<String>,
        cards: Vec<String>,
    },

    /// The game is over
    GameOver { winner: Team },

    /// Reconnect snapshot of the missions finished so far
    GameState {
        #[serde(default)]
        mission_results: Vec<MissionSummary>,
    },

    /// Unknown message type (forward compatibility)
    #[serde(other)]
    Unknown,
}
