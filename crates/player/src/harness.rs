//! Line protocol for the `thavalon-player` binary
//!
//! Each stdin line is either a server message or a local UI action:
//!
//! ```text
//! {"server": {"type": "CommenceVoting", "players": ["Alice", "Bob"]}}
//! {"ui": {"action": "CastVote", "upvote": true}}
//! ```

use serde::Deserialize;
use thavalon_domain::{Card, Vote};
use thavalon_shared::ServerMessage;

use crate::infrastructure::message_translator::{translate, Inbound};
use crate::ports::outbound::HostDocumentPort;
use crate::presentation::layout::Region;
use crate::presentation::{PhaseError, PhaseView};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarnessInput {
    Server(ServerMessage),
    Ui(UiAction),
}

/// Widget interactions the host would wire to input events
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all_fields = "camelCase")]
pub enum UiAction {
    SelectMember { player: String },
    DeselectMember { player: String },
    SubmitProposal,
    CastVote { upvote: bool },
    PlayCard { card: String },
}

pub fn parse_line(line: &str) -> Result<HarnessInput, serde_json::Error> {
    serde_json::from_str(line)
}

/// Apply one input line.
///
/// Server messages go through `PhaseView::dispatch`, so a rejected event is
/// logged rather than returned. UI actions return their error.
pub fn apply_input<D: HostDocumentPort>(
    view: &mut PhaseView<D>,
    input: HarnessInput,
) -> Result<(), PhaseError> {
    match input {
        HarnessInput::Server(message) => {
            match translate(message) {
                Inbound::Phase(event) => {
                    view.dispatch(event);
                }
                Inbound::ServerError(message) => {
                    tracing::warn!(message = %message, "Server reported an error");
                }
                Inbound::Unknown => tracing::debug!("Ignoring unknown server message"),
            }
            Ok(())
        }
        HarnessInput::Ui(action) => apply_action(view, action),
    }
}

fn apply_action<D: HostDocumentPort>(
    view: &mut PhaseView<D>,
    action: UiAction,
) -> Result<(), PhaseError> {
    match action {
        UiAction::SelectMember { player } => view.select_proposal_member(&player).map(|_| ()),
        UiAction::DeselectMember { player } => view.deselect_proposal_member(&player).map(|_| ()),
        UiAction::SubmitProposal => view.submit_proposal(),
        UiAction::CastVote { upvote } => view.cast_vote(Vote::from(upvote)),
        UiAction::PlayCard { card } => view.play_card(Card::from_tag(&card)),
    }
}

/// Current text of every region, for logging
pub fn region_snapshot<D: HostDocumentPort>(view: &PhaseView<D>) -> Vec<(&'static str, String)> {
    Region::ALL
        .iter()
        .map(|region| (region.label(), view.region_text(*region)))
        .collect()
}
