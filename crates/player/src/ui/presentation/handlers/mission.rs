//! Mission phase: start, in-progress confirmation and resolution

use thavalon_domain::{Card, MissionRecord, PlayerName};

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::components::widgets;
use crate::presentation::errors::PhaseError;
use crate::presentation::helpers::text;
use crate::presentation::state::Phase;
use crate::presentation::views::PhaseView;

impl<D: HostDocumentPort> PhaseView<D> {
    pub(crate) fn start_mission(&mut self, mission: u8, members: &[PlayerName]) -> Result<(), PhaseError> {
        const EVENT: &str = "MissionStarted";

        if members.is_empty() {
            return Err(PhaseError::invalid(EVENT, "players on the mission cannot be empty"));
        }
        self.check_mission_index(EVENT, mission)?;

        let on_mission = members.iter().any(|name| self.session.is_local(name));
        let panel = if on_mission {
            widgets::on_mission_panel(&self.templates)
        } else {
            widgets::spectator_panel(&self.templates, members)
        };

        self.document.clear(&self.layout.mission_body)?;
        self.document.append_fragment(&self.layout.mission_body, panel)?;
        self.document.set_text(&self.layout.proposal_content, text::MISSION_GOING)?;
        self.document.clear(&self.layout.proposal_list)?;

        self.phase = Phase::MissionStarted {
            on_mission,
            played: false,
        };
        tracing::debug!(mission, on_mission, "Mission started");
        Ok(())
    }

    pub(crate) fn confirm_card(&mut self, card: &Card) -> Result<(), PhaseError> {
        if !matches!(self.phase, Phase::MissionStarted { on_mission: true, .. }) {
            return Err(PhaseError::invalid(
                "MissionInProgress",
                "the local player is not on this mission",
            ));
        }

        self.document
            .set_text(&self.layout.mission_body, &text::card_played_sentence(card))?;
        self.phase = Phase::MissionStarted {
            on_mission: true,
            played: true,
        };
        Ok(())
    }

    pub(crate) fn resolve_mission(&mut self, record: &MissionRecord) -> Result<(), PhaseError> {
        const EVENT: &str = "MissionResolved";

        record
            .validate()
            .map_err(|e| PhaseError::invalid(EVENT, e.to_string()))?;
        self.check_mission_index(EVENT, record.index)?;

        self.mark_indicator(record)?;
        self.document
            .set_text(&self.layout.mission_body, text::WAITING_FOR_NEXT_MISSION)?;

        self.phase = Phase::MissionResolved;
        tracing::debug!(
            mission = record.index,
            result = %record.result,
            counts = ?record.card_counts(),
            "Mission resolved"
        );
        Ok(())
    }

    /// Redraw the indicators of missions finished before a reconnect.
    ///
    /// Every record is checked before any indicator changes. The phase and
    /// the mission body are left alone.
    pub(crate) fn restore_missions(&mut self, records: &[MissionRecord]) -> Result<(), PhaseError> {
        const EVENT: &str = "MissionsRestored";

        for record in records {
            record
                .validate()
                .map_err(|e| PhaseError::invalid(EVENT, e.to_string()))?;
            self.check_mission_index(EVENT, record.index)?;
        }
        for record in records {
            self.mark_indicator(record)?;
        }
        tracing::debug!(missions = records.len(), "Mission indicators restored");
        Ok(())
    }

    fn mark_indicator(&mut self, record: &MissionRecord) -> Result<(), PhaseError> {
        let indicator = self.layout.mission_indicator(record.index);
        let marker = widgets::mission_marker(&self.templates, record.result);
        let popover = text::mission_popover(record, self.presentation.legacy_popover_separator);

        self.document.clear(&indicator)?;
        self.document.append_fragment(&indicator, marker)?;
        self.document.set_attribute(&indicator, "data-toggle", "popover")?;
        self.document.set_attribute(&indicator, "data-content", &popover)?;
        Ok(())
    }

    fn check_mission_index(&self, event: &'static str, mission: u8) -> Result<(), PhaseError> {
        let count = self.presentation.mission_count;
        if mission == 0 || mission > count {
            return Err(PhaseError::invalid(
                event,
                format!("mission {mission} is outside 1..={count}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PresentationConfig;
    use crate::infrastructure::document::MemoryDocument;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::{HostDocumentPort, MockGameActionPort, PhaseEvent};
    use crate::presentation::errors::PhaseError;
    use crate::presentation::layout::Region;
    use crate::presentation::state::Phase;
    use crate::presentation::views::PhaseView;
    use thavalon_domain::{Card, MissionRecord, MissionResult};

    const ORDER: [&str; 5] = ["Amy", "Ben", "Cal", "Dan", "Eve"];

    fn on_mission_view(local: &str, members: &[&str], presentation: &PresentationConfig) -> PhaseView<MemoryDocument> {
        let mut view = fixtures::view_on(fixtures::page(), local, MockGameActionPort::new(), presentation);
        fixtures::drive_to_submitted(&mut view, &ORDER, members);
        view.apply(fixtures::vote_opened(members)).expect("voting");
        view.apply(fixtures::mission_started(1, members)).expect("mission");
        view
    }

    #[test]
    fn test_on_mission_player_gets_card_controls() {
        let view = on_mission_view("Dan", &["Dan", "Eve"], &PresentationConfig::default());

        let body = view.document().element("missionBodyLocation").expect("mission body");
        assert!(body.find_by_id("successButton").is_some());
        assert_eq!(view.region_text(Region::ProposalContent), "Mission is going.");
        assert!(!view.document().contains("upvoteButton"));
        assert_eq!(
            view.phase(),
            Phase::MissionStarted {
                on_mission: true,
                played: false
            }
        );
    }

    #[test]
    fn test_spectator_sentence_uses_join_rule() {
        let view = on_mission_view("Amy", &["Ben", "Cal", "Dan"], &PresentationConfig::default());
        assert_eq!(
            view.region_text(Region::MissionBody),
            "Please wait while Ben, Cal, and Dan go on a mission."
        );
        assert!(!view.document().contains("successButton"));
    }

    #[test]
    fn test_card_confirmation_flavor() {
        for (card, expected) in [
            (Card::Success, "You have played a Success. Good job!"),
            (Card::Fail, "You have played a Fail. Why did you have to fail :(."),
            (Card::Reverse, "You have played a Reverse. I see a bus in your future."),
            (
                Card::Unrecognized("Joker".into()),
                "You have played a Joker. I see a bus in your future.",
            ),
        ] {
            let mut view = on_mission_view("Dan", &["Dan", "Eve"], &PresentationConfig::default());
            view.apply(PhaseEvent::MissionInProgress { card }).expect("card");
            assert_eq!(view.region_text(Region::MissionBody), expected);
        }
    }

    #[test]
    fn test_spectator_cannot_receive_card_confirmation() {
        let mut view = on_mission_view("Amy", &["Dan", "Eve"], &PresentationConfig::default());
        let before = view.document().to_html();
        let result = view.apply(PhaseEvent::MissionInProgress { card: Card::Fail });
        assert!(matches!(result, Err(PhaseError::InvalidEvent { .. })));
        assert_eq!(view.document().to_html(), before);
    }

    #[test]
    fn test_failed_mission_legacy_popover() {
        let presentation = PresentationConfig {
            legacy_popover_separator: true,
            ..PresentationConfig::default()
        };
        let mut view = on_mission_view("Amy", &["Dan", "Eve"], &presentation);
        view.apply(fixtures::mission_resolved(
            1,
            MissionResult::Fail,
            &["Dan", "Eve"],
            vec![Card::Fail, Card::Success],
        ))
        .expect("resolved");

        let indicator = view.document().element("m1Indicator").expect("indicator");
        assert!(indicator.find(|el| el.has_class("mission-failed")).is_some());
        assert!(indicator.find(|el| el.has_class("mission-passed")).is_none());
        assert_eq!(indicator.attr("data-toggle"), Some("popover"));
        assert_eq!(
            indicator.attr("data-content"),
            Some("Players: Dan and Eve (2)<br />Cards Played: Fail, Success, ")
        );
        assert_eq!(view.region_text(Region::MissionBody), "Waiting for the next mission.");
        assert_eq!(view.phase(), Phase::MissionResolved);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut view = on_mission_view("Amy", &["Dan", "Eve"], &PresentationConfig::default());
        let event = fixtures::mission_resolved(
            1,
            MissionResult::Pass,
            &["Dan", "Eve"],
            vec![Card::Success, Card::Success],
        );
        view.apply(event.clone()).expect("resolved");
        let once = view.document().to_html();
        view.apply(event).expect("resolved again");

        assert_eq!(view.document().to_html(), once);
        let indicator = view.document().element("m1Indicator").expect("indicator");
        assert_eq!(indicator.find_all(|el| el.has_class("mission-passed")).len(), 1);
        assert_eq!(
            indicator.attr("data-content"),
            Some("Players: Dan and Eve (2)<br />Cards Played: Success, Success")
        );
    }

    #[test]
    fn test_out_of_range_indicator_is_rejected() {
        let mut view = on_mission_view("Amy", &["Dan", "Eve"], &PresentationConfig::default());
        let before = view.document().to_html();
        for index in [0, 6] {
            let result = view.apply(fixtures::mission_resolved(
                index,
                MissionResult::Pass,
                &["Dan", "Eve"],
                vec![Card::Success, Card::Success],
            ));
            assert!(matches!(result, Err(PhaseError::InvalidEvent { .. })), "{index}");
        }
        assert_eq!(view.document().to_html(), before);
    }

    fn finished(index: u8, result: MissionResult, members: &[&str], cards: Vec<Card>) -> MissionRecord {
        MissionRecord {
            index,
            result,
            members: fixtures::players(members),
            cards_played: cards,
        }
    }

    #[test]
    fn test_restored_missions_mark_indicators_only() {
        let mut view = fixtures::view("Amy", MockGameActionPort::new());
        fixtures::drive_to_submitted(&mut view, &ORDER, &["Amy", "Ben"]);
        let content_before = view.region_text(Region::ProposalContent);

        view.apply(PhaseEvent::MissionsRestored {
            records: vec![
                finished(2, MissionResult::Fail, &["Cal", "Dan"], vec![Card::Fail, Card::Success]),
                finished(1, MissionResult::Pass, &["Amy", "Ben"], vec![Card::Success, Card::Success]),
            ],
        })
        .expect("restored");

        let first = view.document().element("m1Indicator").expect("indicator");
        assert!(first.find(|el| el.has_class("mission-passed")).is_some());
        let second = view.document().element("m2Indicator").expect("indicator");
        assert!(second.find(|el| el.has_class("mission-failed")).is_some());
        assert_eq!(
            second.attr("data-content"),
            Some("Players: Cal and Dan (2)<br />Cards Played: Fail, Success")
        );
        let third = view.document().element("m3Indicator").expect("indicator");
        assert_eq!(third.attr("data-toggle"), None);

        assert_eq!(view.region_text(Region::ProposalContent), content_before);
        assert_eq!(view.phase(), Phase::ProposalSubmitted);
    }

    #[test]
    fn test_restore_rejects_whole_snapshot_on_bad_record() {
        let mut view = fixtures::view("Amy", MockGameActionPort::new());
        let before = view.document().to_html();

        let result = view.apply(PhaseEvent::MissionsRestored {
            records: vec![
                finished(1, MissionResult::Pass, &["Amy", "Ben"], vec![Card::Success, Card::Success]),
                finished(9, MissionResult::Fail, &["Cal", "Dan"], vec![Card::Fail, Card::Fail]),
            ],
        });

        assert!(matches!(
            result,
            Err(PhaseError::InvalidEvent {
                event: "MissionsRestored",
                ..
            })
        ));
        assert_eq!(view.document().to_html(), before);
    }
}
