//! Game over

use thavalon_domain::Team;

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::errors::PhaseError;
use crate::presentation::helpers::text;
use crate::presentation::state::Phase;
use crate::presentation::views::PhaseView;

impl<D: HostDocumentPort> PhaseView<D> {
    pub(crate) fn end_game(&mut self, winner: Team) -> Result<(), PhaseError> {
        self.document.set_text(&self.layout.phase_tab, text::GAME_OVER_TAB)?;
        self.document
            .set_text(&self.layout.proposal_header, &text::game_over_sentence(winner))?;
        self.document.clear(&self.layout.proposal_content)?;
        self.document.clear(&self.layout.proposal_list)?;

        self.phase = Phase::GameOver;
        tracing::info!(winner = %winner, "Game over");
        Ok(())
    }
}
