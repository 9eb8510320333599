//! Widget interactions wired to host input events
//!
//! Each interaction only works while its widget is live; otherwise it returns
//! `PhaseError::WidgetUnavailable` and nothing is sent.

use thavalon_domain::{Card, Vote};

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::components::widgets::{
    self, PickerChange, CARD_PANEL_ID, PICKER_ID, VOTE_BUTTONS_ID,
};
use crate::presentation::dom::Element;
use crate::presentation::errors::PhaseError;
use crate::presentation::state::Phase;
use crate::presentation::views::PhaseView;

const PICKER: &str = "proposal picker";
const VOTE_BUTTONS: &str = "vote buttons";
const MISSION_CARDS: &str = "mission cards";

impl<D: HostDocumentPort> PhaseView<D> {
    /// Select a player in the proposal picker.
    ///
    /// Returns whether the selection changed. Selecting past the cap is
    /// refused by the picker and leaves the selection as it was.
    pub fn select_proposal_member(&mut self, name: &str) -> Result<bool, PhaseError> {
        let picker = self.live_picker()?;
        match widgets::select_option(picker, name) {
            PickerChange::Changed => Ok(true),
            PickerChange::Unchanged => Ok(false),
            PickerChange::Refused => {
                tracing::debug!(player = %name, "Picker is full, selection refused");
                Ok(false)
            }
            PickerChange::NoSuchOption => Err(no_option(name)),
        }
    }

    pub fn deselect_proposal_member(&mut self, name: &str) -> Result<bool, PhaseError> {
        let picker = self.live_picker()?;
        match widgets::deselect_option(picker, name) {
            PickerChange::Changed => Ok(true),
            PickerChange::Unchanged | PickerChange::Refused => Ok(false),
            PickerChange::NoSuchOption => Err(no_option(name)),
        }
    }

    /// Send the picker's selection. The server rules on legality.
    pub fn submit_proposal(&mut self) -> Result<(), PhaseError> {
        let picker = self.live_picker()?;
        let players = widgets::selected_players(picker);
        let within_cap = players.len() == widgets::picker_cap(picker);

        self.actions.submit_proposal(&players, within_cap)?;
        tracing::info!(players = ?players, within_cap, "Proposal submitted");
        Ok(())
    }

    pub fn cast_vote(&mut self, vote: Vote) -> Result<(), PhaseError> {
        if self.phase != (Phase::Voting { voted: false }) {
            return Err(PhaseError::unavailable(
                VOTE_BUTTONS,
                format!("phase is {}", self.phase),
            ));
        }
        if !self.document.contains(VOTE_BUTTONS_ID) {
            return Err(PhaseError::unavailable(VOTE_BUTTONS, "the buttons are not mounted"));
        }

        self.actions.submit_vote(vote)?;
        tracing::info!(vote = %vote, "Vote cast");
        Ok(())
    }

    pub fn play_card(&mut self, card: Card) -> Result<(), PhaseError> {
        let armed = matches!(
            self.phase,
            Phase::MissionStarted {
                on_mission: true,
                played: false
            }
        );
        if !armed {
            return Err(PhaseError::unavailable(
                MISSION_CARDS,
                format!("phase is {}", self.phase),
            ));
        }
        if !self.document.contains(CARD_PANEL_ID) {
            return Err(PhaseError::unavailable(MISSION_CARDS, "the cards are not mounted"));
        }

        self.actions.play_card(&card)?;
        tracing::info!(card = %card, "Card played");
        Ok(())
    }

    fn live_picker(&mut self) -> Result<&mut Element, PhaseError> {
        if self.phase != Phase::Proposing {
            return Err(PhaseError::unavailable(PICKER, format!("phase is {}", self.phase)));
        }
        self.document
            .element_mut(PICKER_ID)
            .ok_or_else(|| PhaseError::unavailable(PICKER, "the picker is not mounted"))
    }
}

fn no_option(name: &str) -> PhaseError {
    PhaseError::unavailable(PICKER, format!("no option for {name}"))
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::{ActionError, HostDocumentPort, MockGameActionPort, PhaseEvent};
    use crate::presentation::errors::PhaseError;
    use mockall::predicate::*;
    use thavalon_domain::{Card, PlayerName, Vote, VoteTally};

    const ORDER: [&str; 3] = ["Alice", "Bob", "Carol"];

    #[test]
    fn test_submit_sends_selection_with_cap_check() {
        let mut actions = MockGameActionPort::new();
        actions
            .expect_submit_proposal()
            .withf(|players: &[PlayerName], within_cap: &bool| {
                players == ["Alice", "Carol"] && *within_cap
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut view = fixtures::view("Alice", actions);
        view.apply(fixtures::proposal_started(&ORDER, 0, 1, 5, 2, false))
            .expect("proposal");

        assert!(view.select_proposal_member("Alice").expect("select"));
        assert!(view.select_proposal_member("Carol").expect("select"));
        assert!(!view.select_proposal_member("Bob").expect("over cap is refused"));
        view.submit_proposal().expect("submitted");
    }

    #[test]
    fn test_short_selection_reports_cap_miss() {
        let mut actions = MockGameActionPort::new();
        actions
            .expect_submit_proposal()
            .withf(|players: &[PlayerName], within_cap: &bool| {
                players == ["Bob"] && !*within_cap
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut view = fixtures::view("Alice", actions);
        view.apply(fixtures::proposal_started(&ORDER, 0, 1, 5, 2, false))
            .expect("proposal");
        view.select_proposal_member("Bob").expect("select");
        view.select_proposal_member("Carol").expect("select");
        assert!(view.deselect_proposal_member("Carol").expect("deselect"));
        view.submit_proposal().expect("submitted");
    }

    #[test]
    fn test_picker_unavailable_to_spectators() {
        let mut actions = MockGameActionPort::new();
        actions.expect_submit_proposal().never();

        let mut view = fixtures::view("Bob", actions);
        view.apply(fixtures::proposal_started(&ORDER, 0, 1, 5, 2, false))
            .expect("proposal");

        assert!(matches!(
            view.select_proposal_member("Alice"),
            Err(PhaseError::WidgetUnavailable { .. })
        ));
        assert!(matches!(view.submit_proposal(), Err(PhaseError::WidgetUnavailable { .. })));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut view = fixtures::view("Alice", MockGameActionPort::new());
        view.apply(fixtures::proposal_started(&ORDER, 0, 1, 5, 2, false))
            .expect("proposal");
        assert!(matches!(
            view.select_proposal_member("Mallory"),
            Err(PhaseError::WidgetUnavailable { .. })
        ));
    }

    #[test]
    fn test_vote_only_once_buttons_are_live() {
        let mut actions = MockGameActionPort::new();
        actions
            .expect_submit_vote()
            .with(eq(Vote::Downvote))
            .times(1)
            .returning(|_| Ok(()));

        let mut view = fixtures::view("Carol", actions);
        assert!(matches!(
            view.cast_vote(Vote::Upvote),
            Err(PhaseError::WidgetUnavailable { .. })
        ));

        fixtures::drive_to_submitted(&mut view, &ORDER, &["Alice", "Bob"]);
        view.apply(fixtures::vote_opened(&["Alice", "Bob"])).expect("voting");
        view.cast_vote(Vote::Downvote).expect("vote sent");

        view.apply(PhaseEvent::VoteRecorded {
            vote: Vote::Downvote,
        })
        .expect("recorded");
        assert!(matches!(
            view.cast_vote(Vote::Downvote),
            Err(PhaseError::WidgetUnavailable { .. })
        ));
    }

    #[test]
    fn test_prior_results_take_down_open_vote_buttons() {
        let mut actions = MockGameActionPort::new();
        actions.expect_submit_vote().never();

        let mut view = fixtures::view("Carol", actions);
        fixtures::drive_to_submitted(&mut view, &ORDER, &["Alice", "Bob"]);
        view.apply(fixtures::vote_opened(&["Alice", "Bob"])).expect("voting");
        view.apply(PhaseEvent::PriorVoteResults {
            tally: VoteTally::Obscured {
                upvotes: 2,
                downvotes: 1,
            },
        })
        .expect("results");

        assert!(!view.document().contains("upvoteButton"));
        assert!(matches!(
            view.cast_vote(Vote::Upvote),
            Err(PhaseError::WidgetUnavailable { .. })
        ));
    }

    #[test]
    fn test_card_controls_disarm_after_confirmation() {
        let mut actions = MockGameActionPort::new();
        actions
            .expect_play_card()
            .with(eq(Card::Reverse))
            .times(1)
            .returning(|_| Ok(()));

        let mut view = fixtures::view("Bob", actions);
        fixtures::drive_to_submitted(&mut view, &ORDER, &["Alice", "Bob"]);
        view.apply(fixtures::mission_started(2, &["Alice", "Bob"]))
            .expect("mission");

        view.play_card(Card::Reverse).expect("card sent");
        view.apply(PhaseEvent::MissionInProgress {
            card: Card::Reverse,
        })
        .expect("confirmed");
        assert!(matches!(
            view.play_card(Card::Fail),
            Err(PhaseError::WidgetUnavailable { .. })
        ));
    }

    #[test]
    fn test_spectator_cannot_play_cards() {
        let mut actions = MockGameActionPort::new();
        actions.expect_play_card().never();

        let mut view = fixtures::view("Carol", actions);
        fixtures::drive_to_submitted(&mut view, &ORDER, &["Alice", "Bob"]);
        view.apply(fixtures::mission_started(1, &["Alice", "Bob"]))
            .expect("mission");
        assert!(matches!(
            view.play_card(Card::Success),
            Err(PhaseError::WidgetUnavailable { .. })
        ));
    }

    #[test]
    fn test_transport_failure_surfaces() {
        let mut actions = MockGameActionPort::new();
        actions
            .expect_submit_vote()
            .returning(|_| Err(ActionError::ChannelClosed));

        let mut view = fixtures::view("Carol", actions);
        fixtures::drive_to_submitted(&mut view, &ORDER, &["Alice", "Bob"]);
        view.apply(fixtures::vote_opened(&["Alice", "Bob"])).expect("voting");
        assert_eq!(
            view.cast_vote(Vote::Upvote),
            Err(PhaseError::Action(ActionError::ChannelClosed))
        );
    }
}
