//! Voting on a proposal and the prior vote results

use thavalon_domain::{PlayerName, Vote, VoteTally};

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::components::widgets;
use crate::presentation::dom::Element;
use crate::presentation::errors::PhaseError;
use crate::presentation::helpers::text;
use crate::presentation::state::Phase;
use crate::presentation::views::PhaseView;

impl<D: HostDocumentPort> PhaseView<D> {
    pub(crate) fn open_vote(&mut self, members: &[PlayerName]) -> Result<(), PhaseError> {
        if members.is_empty() {
            return Err(PhaseError::invalid("VoteOpened", "players on the proposal cannot be empty"));
        }

        self.document.set_text(&self.layout.phase_tab, text::VOTING_TAB)?;
        self.document.clear(&self.layout.proposal_list)?;

        let buttons = widgets::vote_buttons(&self.templates);
        let content = self.document.require_mut(&self.layout.proposal_content)?;
        content.set_text(text::VOTING_ON);
        content.append(widgets::name_list(members));
        content.append_fragment(buttons);

        self.phase = Phase::Voting { voted: false };
        Ok(())
    }

    pub(crate) fn record_vote(&mut self, vote: Vote) -> Result<(), PhaseError> {
        self.document
            .set_text(&self.layout.proposal_content, &text::vote_confirmation(vote))?;
        self.phase = Phase::Voting { voted: true };
        tracing::debug!(vote = %vote, "Local vote recorded");
        Ok(())
    }

    pub(crate) fn show_prior_votes(&mut self, tally: &VoteTally) -> Result<(), PhaseError> {
        let target = self.prior_votes_target();
        let region = self.document.require_mut(&target)?;
        region.set_text(text::PRIOR_VOTES_HEADING);

        let list = match tally {
            VoteTally::Obscured { upvotes, downvotes } => {
                region.append(Element::new("br"));
                region.append(text::OBSCURED_NOTICE);
                Element::new("ul")
                    .with_child(Element::new("li").with_text(&format!("Upvotes: {upvotes}")))
                    .with_child(Element::new("li").with_text(&format!("Downvotes: {downvotes}")))
            }
            VoteTally::Attributed(entries) => entries.iter().fold(Element::new("ul"), |list, entry| {
                list.with_child(
                    Element::new("li").with_text(&format!("{}: {}", entry.player, entry.vote)),
                )
            }),
        };
        region.append(list);

        tracing::debug!(mount = %target, obscured = tally.is_obscured(), "Prior vote results rendered");
        Ok(())
    }
}
