//! Proposal phase: header, proposer picker and spectator body

use thavalon_domain::{PlayerName, Proposal};

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::components::widgets;
use crate::presentation::dom::Element;
use crate::presentation::errors::PhaseError;
use crate::presentation::helpers::text;
use crate::presentation::state::Phase;
use crate::presentation::views::PhaseView;

impl<D: HostDocumentPort> PhaseView<D> {
    pub(crate) fn start_proposal(
        &mut self,
        proposal: &Proposal,
        proposal_order: &[PlayerName],
        force: bool,
    ) -> Result<(), PhaseError> {
        const EVENT: &str = "ProposalStarted";

        proposal
            .validate()
            .map_err(|e| PhaseError::invalid(EVENT, e.to_string()))?;
        let proposer = proposal
            .proposer(proposal_order)
            .map_err(|e| PhaseError::invalid(EVENT, e.to_string()))?
            .clone();
        let is_proposing = self.session.index_in(proposal_order) == Some(proposal.proposer_index);

        self.document.set_text(&self.layout.phase_tab, text::PROPOSALS_TAB)?;
        let header = self.document.require_mut(&self.layout.proposal_header)?;
        header.set_text(&text::proposal_title(
            proposal.proposal_number,
            proposal.max_proposals,
        ));
        if proposal.shows_force(force) {
            header.append(
                Element::new("span")
                    .with_class("text-danger")
                    .with_text(text::FORCE_MARKER),
            );
        }
        header.append(Element::new("br"));
        header.append(text::proposer_sentence(
            is_proposing,
            &proposer,
            proposal.mission_size,
        ));

        self.document.clear(&self.layout.proposal_list)?;
        if is_proposing {
            let picker = widgets::proposal_picker(
                &self.templates,
                proposal_order,
                proposal.mission_size,
                &proposal.members,
            );
            self.document.append_fragment(&self.layout.proposal_list, picker)?;
        }
        self.render_proposal_body(&proposer, &proposal.members)?;

        self.phase = if is_proposing {
            Phase::Proposing
        } else {
            Phase::AwaitingProposal
        };
        tracing::debug!(
            proposer = %proposer,
            number = proposal.proposal_number,
            max = proposal.max_proposals,
            size = proposal.mission_size,
            "Proposal header rendered"
        );
        Ok(())
    }

    pub(crate) fn receive_proposal(
        &mut self,
        proposer: &str,
        members: &[PlayerName],
    ) -> Result<(), PhaseError> {
        // The proposer keeps their picker on screen
        if !self.session.is_local(proposer) {
            self.document.clear(&self.layout.proposal_list)?;
        }
        self.render_proposal_body(proposer, members)?;

        if !members.is_empty() {
            self.phase = Phase::ProposalSubmitted;
        }
        Ok(())
    }

    fn render_proposal_body(&mut self, proposer: &str, members: &[PlayerName]) -> Result<(), PhaseError> {
        let content = self.document.require_mut(&self.layout.proposal_content)?;
        if members.is_empty() {
            content.set_text(&text::waiting_for_proposal(proposer));
        } else {
            content.set_text(&text::has_proposed(proposer));
            content.append(widgets::name_list(members));
        }
        Ok(())
    }
}
