//! Simple test fixtures used across unit tests.

use std::sync::Arc;

use thavalon_domain::{Card, MissionRecord, MissionResult, PlayerName, Proposal, RoleInfo, Team};

use crate::config::PresentationConfig;
use crate::infrastructure::document::MemoryDocument;
use crate::ports::outbound::{MockGameActionPort, PhaseEvent};
use crate::presentation::components::TemplateLibrary;
use crate::presentation::layout::DocumentLayout;
use crate::presentation::views::PhaseView;
use crate::session_types::SessionContext;

pub fn players(names: &[&str]) -> Vec<PlayerName> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn session(local_player: &str) -> Arc<SessionContext> {
    Arc::new(SessionContext::new(local_player, "test-game"))
}

/// Standard game page with five mission indicators
pub fn page() -> MemoryDocument {
    MemoryDocument::game_page(&DocumentLayout::default(), 5)
}

pub fn templates() -> TemplateLibrary {
    TemplateLibrary::capture(&page(), &DocumentLayout::default().templates)
        .expect("standard page has every template")
}

pub fn view(local_player: &str, actions: MockGameActionPort) -> PhaseView<MemoryDocument> {
    view_on(page(), local_player, actions, &PresentationConfig::default())
}

pub fn view_on(
    document: MemoryDocument,
    local_player: &str,
    actions: MockGameActionPort,
    presentation: &PresentationConfig,
) -> PhaseView<MemoryDocument> {
    PhaseView::new(
        document,
        session(local_player),
        Arc::new(actions),
        &DocumentLayout::default(),
        presentation,
    )
    .expect("page satisfies the layout")
}

pub fn role_assigned(role_name: &str, team: Team, information: &str) -> PhaseEvent {
    PhaseEvent::RoleAssigned {
        role: RoleInfo::new(role_name, team, information),
    }
}

/// Proposal event without validation so tests can send bad values
pub fn proposal_started(
    order: &[&str],
    proposer_index: usize,
    proposal_number: u32,
    max_proposals: u32,
    mission_size: usize,
    force: bool,
) -> PhaseEvent {
    PhaseEvent::ProposalStarted {
        proposal: Proposal {
            proposer_index,
            proposal_number,
            max_proposals,
            mission_size,
            members: vec![],
        },
        proposal_order: players(order),
        force,
    }
}

pub fn vote_opened(members: &[&str]) -> PhaseEvent {
    PhaseEvent::VoteOpened {
        members: players(members),
    }
}

pub fn mission_started(mission: u8, members: &[&str]) -> PhaseEvent {
    PhaseEvent::MissionStarted {
        mission,
        members: players(members),
    }
}

/// Mission result event without validation so tests can send bad values
pub fn mission_resolved(
    index: u8,
    result: MissionResult,
    members: &[&str],
    cards_played: Vec<Card>,
) -> PhaseEvent {
    PhaseEvent::MissionResolved {
        record: MissionRecord {
            index,
            result,
            members: players(members),
            cards_played,
        },
    }
}

/// Start a proposal by `order[0]` and submit `members`
pub fn drive_to_submitted(view: &mut PhaseView<MemoryDocument>, order: &[&str], members: &[&str]) {
    view.apply(proposal_started(order, 0, 1, 5, members.len(), false))
        .expect("proposal starts");
    view.apply(PhaseEvent::ProposalReceived {
        proposer: order[0].to_string(),
        members: players(members),
    })
    .expect("proposal is received");
}
