//! PhaseView - renders game phase events into the host document
//!
//! One PhaseView exists per game session. It owns the host document for the
//! lifetime of the session, applies events strictly in delivery order and
//! forwards the local player's picks to the `GameActionPort`.

use std::sync::Arc;

use crate::config::PresentationConfig;
use crate::ports::outbound::{GameActionPort, HostDocumentPort, PhaseEvent};
use crate::presentation::components::TemplateLibrary;
use crate::presentation::errors::{IntegrationError, PhaseError};
use crate::presentation::layout::{DocumentLayout, Region};
use crate::presentation::state::Phase;
use crate::session_types::SessionContext;

pub struct PhaseView<D: HostDocumentPort> {
    pub(crate) document: D,
    pub(crate) session: Arc<SessionContext>,
    pub(crate) actions: Arc<dyn GameActionPort>,
    pub(crate) layout: DocumentLayout,
    pub(crate) presentation: PresentationConfig,
    pub(crate) templates: TemplateLibrary,
    pub(crate) phase: Phase,
    pub(crate) role_reveals: u8,
}

impl<D: HostDocumentPort> PhaseView<D> {
    /// Bind to a host document.
    ///
    /// Every mount point and template must be present; the first missing one
    /// is returned as an `IntegrationError` and nothing is rendered.
    pub fn new(
        document: D,
        session: Arc<SessionContext>,
        actions: Arc<dyn GameActionPort>,
        layout: &DocumentLayout,
        presentation: &PresentationConfig,
    ) -> Result<Self, IntegrationError> {
        let mut mounts = layout.required_mounts(presentation.mission_count);
        if let Some(prior_votes) = &presentation.prior_votes_mount {
            mounts.push(("prior votes", prior_votes.clone()));
        }
        if let Some((name, id)) = mounts.into_iter().find(|(_, id)| !document.contains(id)) {
            return Err(IntegrationError::MissingMountPoint { name, id });
        }

        let templates = TemplateLibrary::capture(&document, &layout.templates)?;

        tracing::debug!(
            local_player = %session.local_player(),
            game_id = %session.game_id(),
            "PhaseView bound to host document"
        );

        Ok(Self {
            document,
            session,
            actions,
            layout: layout.clone(),
            presentation: presentation.clone(),
            templates,
            phase: Phase::Idle,
            role_reveals: 0,
        })
    }

    /// Apply one phase event.
    ///
    /// Illegal transitions and invalid payloads are rejected before anything
    /// on the page changes.
    pub fn apply(&mut self, event: PhaseEvent) -> Result<(), PhaseError> {
        if !self.phase.accepts(&event) {
            return Err(PhaseError::IllegalTransition {
                event: event.kind(),
                phase: self.phase,
            });
        }

        let before = self.phase;
        match event {
            PhaseEvent::RoleAssigned { role } => self.reveal_role(&role)?,
            PhaseEvent::PlayerOrderSet { players } => self.append_player_order(&players)?,
            PhaseEvent::ProposalStarted {
                proposal,
                proposal_order,
                force,
            } => self.start_proposal(&proposal, &proposal_order, force)?,
            PhaseEvent::ProposalReceived { proposer, members } => {
                self.receive_proposal(&proposer, &members)?
            }
            PhaseEvent::VoteOpened { members } => self.open_vote(&members)?,
            PhaseEvent::VoteRecorded { vote } => self.record_vote(vote)?,
            PhaseEvent::PriorVoteResults { tally } => self.show_prior_votes(&tally)?,
            PhaseEvent::MissionStarted { mission, members } => {
                self.start_mission(mission, &members)?
            }
            PhaseEvent::MissionInProgress { card } => self.confirm_card(&card)?,
            PhaseEvent::MissionResolved { record } => self.resolve_mission(&record)?,
            PhaseEvent::GameEnded { winner } => self.end_game(winner)?,
            PhaseEvent::MissionsRestored { records } => self.restore_missions(&records)?,
        }

        if before != self.phase {
            tracing::info!(from = %before, to = %self.phase, "Phase transition");
        }
        Ok(())
    }

    /// Apply an event, logging and swallowing any per-event error.
    ///
    /// Returns whether the event was applied.
    pub fn dispatch(&mut self, event: PhaseEvent) -> bool {
        let kind = event.kind();
        match self.apply(event) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(event = %kind, state = ?self.phase, error = %e, "Rejected phase event");
                false
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Rendered text of a region, `<br>` as newline
    pub fn region_text(&self, region: Region) -> String {
        self.document
            .inner_text(self.layout.region(region))
            .unwrap_or_default()
    }

    /// Mount point prior vote results go to
    pub(crate) fn prior_votes_target(&self) -> String {
        self.presentation
            .prior_votes_mount
            .clone()
            .unwrap_or_else(|| self.layout.proposal_content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::document::MemoryDocument;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::MockGameActionPort;
    use crate::presentation::dom::{Element, Fragment};
    use thavalon_domain::Team;

    fn build(
        document: MemoryDocument,
        presentation: &PresentationConfig,
    ) -> Result<PhaseView<MemoryDocument>, IntegrationError> {
        PhaseView::new(
            document,
            fixtures::session("Alice"),
            Arc::new(MockGameActionPort::new()),
            &DocumentLayout::default(),
            presentation,
        )
    }

    #[test]
    fn test_binds_to_standard_page() {
        let view = build(fixtures::page(), &PresentationConfig::default()).expect("page is complete");
        assert_eq!(view.phase(), Phase::Idle);
    }

    #[test]
    fn test_every_missing_mount_point_is_fatal() {
        let layout = DocumentLayout::default();
        for (name, id) in layout.required_mounts(5) {
            let mut document = fixtures::page();
            document.remove_element(&id).expect("mount exists on the standard page");
            match build(document, &PresentationConfig::default()) {
                Err(IntegrationError::MissingMountPoint { id: missing, .. }) => {
                    assert_eq!(missing, id, "{name}")
                }
                _ => panic!("Expected MissingMountPoint for {name}"),
            }
        }
    }

    #[test]
    fn test_every_missing_template_is_fatal() {
        let layout = DocumentLayout::default();
        for (name, id) in layout.templates.all() {
            let mut document = fixtures::page();
            document.remove_element(id).expect("template exists on the standard page");
            match build(document, &PresentationConfig::default()) {
                Err(IntegrationError::MissingTemplate { id: missing, .. }) => {
                    assert_eq!(missing, id, "{name}")
                }
                _ => panic!("Expected MissingTemplate for {name}"),
            }
        }
    }

    #[test]
    fn test_template_without_pre_is_malformed() {
        let mut document = fixtures::page();
        document.set_template(
            "notOnMissionTemplate",
            Fragment::new(vec![Element::new("div").into()]),
        );

        let result = build(document, &PresentationConfig::default());
        assert!(matches!(
            result,
            Err(IntegrationError::MalformedTemplate { missing: "<pre>", .. })
        ));
    }

    #[test]
    fn test_configured_prior_votes_mount_is_required() {
        let presentation = PresentationConfig {
            prior_votes_mount: Some("priorVoteLocation".into()),
            ..PresentationConfig::default()
        };
        let result = build(fixtures::page(), &presentation);
        assert!(matches!(
            result,
            Err(IntegrationError::MissingMountPoint { name: "prior votes", .. })
        ));
    }

    #[test]
    fn test_dispatch_swallows_rejected_events() {
        let mut view = build(fixtures::page(), &PresentationConfig::default()).expect("page is complete");
        let before = view.document().to_html();

        assert!(!view.dispatch(fixtures::vote_opened(&["Alice", "Bob"])));
        assert_eq!(view.document().to_html(), before);
        assert_eq!(view.phase(), Phase::Idle);

        assert!(view.dispatch(PhaseEvent::GameEnded { winner: Team::Evil }));
        assert_eq!(view.phase(), Phase::GameOver);
    }
}
