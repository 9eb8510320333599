//! Translates ServerMessage from the wire protocol into PhaseEvents
//!
//! PhaseView never sees wire types. Payloads are carried over as-is: values
//! the view must validate (proposal numbers, mission indices) are checked by
//! the handler that consumes them, so a bad message is rejected as one event
//! instead of failing translation.

use thavalon_domain::{
    Card, MissionRecord, Proposal, RoleInfo, TalliedVote, TallyEntry, Vote, VoteTally,
};
use thavalon_shared::{MissionSummary, ServerMessage, VoteEntry};

use crate::ports::outbound::PhaseEvent;

/// What an inbound server message means for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Phase(PhaseEvent),
    /// The server rejected something the player did
    ServerError(String),
    /// A message type this client does not know
    Unknown,
}

/// Translate a ServerMessage into what PhaseView consumes
pub fn translate(msg: ServerMessage) -> Inbound {
    let event = match msg {
        ServerMessage::Error { message } => return Inbound::ServerError(message),
        ServerMessage::Unknown => return Inbound::Unknown,

        ServerMessage::RoleInformation {
            role,
            team,
            information,
        } => PhaseEvent::RoleAssigned {
            role: RoleInfo::new(role, team, information),
        },

        ServerMessage::PlayerOrder { players } => PhaseEvent::PlayerOrderSet { players },

        ServerMessage::NewProposal {
            proposer_index,
            proposal_order,
            proposal_number,
            max_proposals,
            mission_size,
            force,
            current_proposal,
        } => PhaseEvent::ProposalStarted {
            proposal: Proposal {
                proposer_index,
                proposal_number,
                max_proposals,
                mission_size,
                members: current_proposal,
            },
            proposal_order,
            force,
        },

        ServerMessage::ProposalMade { proposer, players } => PhaseEvent::ProposalReceived {
            proposer,
            members: players,
        },

        ServerMessage::CommenceVoting { players } => PhaseEvent::VoteOpened { members: players },

        ServerMessage::VoteReceived { upvote } => PhaseEvent::VoteRecorded {
            vote: Vote::from(upvote),
        },

        ServerMessage::VotingResults {
            obscured,
            votes,
            upvotes,
            downvotes,
        } => PhaseEvent::PriorVoteResults {
            tally: if obscured {
                VoteTally::Obscured { upvotes, downvotes }
            } else {
                VoteTally::Attributed(votes.into_iter().map(translate_vote_entry).collect())
            },
        },

        ServerMessage::MissionGoing { mission, players } => PhaseEvent::MissionStarted {
            mission,
            members: players,
        },

        ServerMessage::CardPlayed { card } => PhaseEvent::MissionInProgress {
            card: Card::from_tag(&card),
        },

        ServerMessage::MissionResults {
            mission,
            result,
            players,
            cards,
        } => PhaseEvent::MissionResolved {
            record: translate_mission(MissionSummary {
                mission,
                result,
                players,
                cards,
            }),
        },

        ServerMessage::GameOver { winner } => PhaseEvent::GameEnded { winner },

        ServerMessage::GameState { mission_results } => PhaseEvent::MissionsRestored {
            records: mission_results.into_iter().map(translate_mission).collect(),
        },
    };
    Inbound::Phase(event)
}

fn translate_mission(summary: MissionSummary) -> MissionRecord {
    MissionRecord {
        index: summary.mission,
        result: summary.result,
        members: summary.players,
        cards_played: summary.cards.iter().map(|tag| Card::from_tag(tag)).collect(),
    }
}

fn translate_vote_entry(entry: VoteEntry) -> TallyEntry {
    TallyEntry::new(entry.player, TalliedVote::from_code(entry.vote))
}
