//! Phase events - the data contract between the message translator and PhaseView
//!
//! Each variant carries only the fields its handler needs. Delivery order is
//! authoritative: PhaseView applies events one at a time, as they arrive.

use std::fmt;

use thavalon_domain::{Card, MissionRecord, PlayerName, Proposal, RoleInfo, Team, Vote, VoteTally};

/// A discrete phase event pushed by the game server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseEvent {
    /// The local player's role (initial reveal or reconnect resync)
    RoleAssigned { role: RoleInfo },

    /// Proposal order for the game
    PlayerOrderSet { players: Vec<PlayerName> },

    /// A new proposal began
    ProposalStarted {
        proposal: Proposal,
        proposal_order: Vec<PlayerName>,
        /// Explicit force signal from the server, never derived locally
        force: bool,
    },

    /// The proposer submitted their pick
    ProposalReceived {
        proposer: PlayerName,
        members: Vec<PlayerName>,
    },

    /// Voting opened on the submitted proposal
    VoteOpened { members: Vec<PlayerName> },

    /// The local player's vote was recorded
    VoteRecorded { vote: Vote },

    /// Results of the previous vote
    PriorVoteResults { tally: VoteTally },

    /// A mission is going
    MissionStarted {
        mission: u8,
        members: Vec<PlayerName>,
    },

    /// The local player's card was recorded while others still play
    MissionInProgress { card: Card },

    /// A mission finished
    MissionResolved { record: MissionRecord },

    /// The game is over
    GameEnded { winner: Team },

    /// Missions finished before a reconnect, in any order
    MissionsRestored { records: Vec<MissionRecord> },
}

impl PhaseEvent {
    /// Short name used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            PhaseEvent::RoleAssigned { .. } => "RoleAssigned",
            PhaseEvent::PlayerOrderSet { .. } => "PlayerOrderSet",
            PhaseEvent::ProposalStarted { .. } => "ProposalStarted",
            PhaseEvent::ProposalReceived { .. } => "ProposalReceived",
            PhaseEvent::VoteOpened { .. } => "VoteOpened",
            PhaseEvent::VoteRecorded { .. } => "VoteRecorded",
            PhaseEvent::PriorVoteResults { .. } => "PriorVoteResults",
            PhaseEvent::MissionStarted { .. } => "MissionStarted",
            PhaseEvent::MissionInProgress { .. } => "MissionInProgress",
            PhaseEvent::MissionResolved { .. } => "MissionResolved",
            PhaseEvent::GameEnded { .. } => "GameEnded",
            PhaseEvent::MissionsRestored { .. } => "MissionsRestored",
        }
    }
}

impl fmt::Display for PhaseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
