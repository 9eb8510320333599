//! Explicit phase state machine
//!
//! Which events may arrive depends on the phase the view is showing. An event
//! that does not match a legal transition is rejected before anything on the
//! page changes.

use std::fmt;

use crate::ports::outbound::PhaseEvent;

/// The phase currently shown by the proposal, vote and mission regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing phase-specific has been shown yet
    #[default]
    Idle,
    /// Someone else is picking a proposal
    AwaitingProposal,
    /// The local player is picking a proposal
    Proposing,
    /// A proposal is on the table
    ProposalSubmitted,
    /// Voting on the proposal; `voted` once the local vote is recorded
    Voting { voted: bool },
    /// A mission is going; `played` once the local card is recorded
    MissionStarted { on_mission: bool, played: bool },
    MissionResolved,
    GameOver,
}

impl Phase {
    /// Whether `event` is a legal next event from this phase
    pub fn accepts(&self, event: &PhaseEvent) -> bool {
        use Phase::*;

        match event {
            // These address regions that are not tied to a phase
            PhaseEvent::RoleAssigned { .. }
            | PhaseEvent::PlayerOrderSet { .. }
            | PhaseEvent::MissionsRestored { .. } => true,
            PhaseEvent::GameEnded { .. } => true,
            PhaseEvent::PriorVoteResults { .. } => !matches!(self, Idle | GameOver),
            PhaseEvent::ProposalStarted { .. } => matches!(
                self,
                Idle | AwaitingProposal
                    | Proposing
                    | ProposalSubmitted
                    | Voting { .. }
                    | MissionResolved
            ),
            PhaseEvent::ProposalReceived { .. } => {
                matches!(self, AwaitingProposal | Proposing | ProposalSubmitted)
            }
            PhaseEvent::VoteOpened { .. } => matches!(self, ProposalSubmitted | Voting { .. }),
            PhaseEvent::VoteRecorded { .. } => matches!(self, Voting { .. }),
            // A forced proposal goes straight to the mission
            PhaseEvent::MissionStarted { .. } => {
                matches!(self, ProposalSubmitted | Voting { .. } | MissionStarted { .. })
            }
            PhaseEvent::MissionInProgress { .. } => matches!(self, MissionStarted { .. }),
            PhaseEvent::MissionResolved { .. } => {
                matches!(self, MissionStarted { .. } | MissionResolved)
            }
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::AwaitingProposal => write!(f, "awaiting a proposal"),
            Phase::Proposing => write!(f, "proposing"),
            Phase::ProposalSubmitted => write!(f, "a proposal is submitted"),
            Phase::Voting { voted: false } => write!(f, "voting"),
            Phase::Voting { voted: true } => write!(f, "voting (vote recorded)"),
            Phase::MissionStarted { .. } => write!(f, "a mission is going"),
            Phase::MissionResolved => write!(f, "a mission just resolved"),
            Phase::GameOver => write!(f, "the game is over"),
        }
    }
}
