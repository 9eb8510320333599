//! Player-facing wording
//!
//! Every sentence the phase handlers write is built here so grammar rules
//! (proposer vs. spectator framing, name joining, vote and card wording)
//! are tested in one place.

use thavalon_domain::{Card, MissionRecord, PlayerName, Team, Vote};

pub const PROPOSALS_TAB: &str = "Proposals";
pub const VOTING_TAB: &str = "Voting";
pub const GAME_OVER_TAB: &str = "Game Over";

pub const FORCE_MARKER: &str = " [FORCE]";
pub const VOTING_ON: &str = "Voting on:";
pub const PRIOR_VOTES_HEADING: &str = "Prior proposal votes:";
pub const OBSCURED_NOTICE: &str = "Someone has obscured the votes.";
pub const MISSION_GOING: &str = "Mission is going.";
pub const WAITING_FOR_NEXT_MISSION: &str = "Waiting for the next mission.";

const ROLE_INFO_SEPARATOR: &str = "-------------------------";

/// Join player names with the "and" rule:
/// the last name gets an "and " prefix, exactly two names are space-joined
/// with no comma, otherwise names are ", "-joined.
pub fn join_players(names: &[PlayerName]) -> String {
    let count = names.len();
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i + 1 == count {
            out.push_str("and ");
            out.push_str(name);
        } else if count == 2 {
            out.push_str(name);
            out.push(' ');
        } else {
            out.push_str(name);
            out.push_str(", ");
        }
    }
    out
}

/// `join_players` followed by the head count, e.g. "Dan and Eve (2)"
pub fn roster_with_count(names: &[PlayerName]) -> String {
    format!("{} ({})", join_players(names), names.len())
}

// ---------------------------------------------------------------------------
// Role reveal
// ---------------------------------------------------------------------------

pub fn role_sentence(role_name: &str) -> String {
    format!("You are {role_name}")
}

pub fn team_tag(team: Team) -> String {
    format!(" {}", team.tag())
}

pub fn team_class(team: Team) -> &'static str {
    match team {
        Team::Good => "text-success",
        Team::Evil => "text-danger",
    }
}

pub fn role_information_block(information: &str) -> String {
    format!("{ROLE_INFO_SEPARATOR}\r\n{information}\r\n{ROLE_INFO_SEPARATOR}")
}

// ---------------------------------------------------------------------------
// Proposals
// ---------------------------------------------------------------------------

pub fn proposal_title(proposal_number: u32, max_proposals: u32) -> String {
    format!("Proposal {proposal_number}/{max_proposals}")
}

pub fn proposer_sentence(is_self: bool, proposer: &str, mission_size: usize) -> String {
    let subject = if is_self {
        "You are".to_string()
    } else {
        format!("{proposer} is")
    };
    format!("{subject} proposing a {mission_size} person mission.")
}

pub fn waiting_for_proposal(proposer: &str) -> String {
    format!("Please wait while {proposer} proposes a mission.")
}

pub fn has_proposed(proposer: &str) -> String {
    format!("{proposer} has proposed:")
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

pub fn vote_confirmation(vote: Vote) -> String {
    format!(
        "You have {}. Please wait while others finish voting.",
        vote.past_tense()
    )
}

// ---------------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------------

pub fn spectating_sentence(members: &[PlayerName]) -> String {
    format!("Please wait while {} go on a mission.", join_players(members))
}

pub fn card_played_sentence(card: &Card) -> String {
    let flavor = match card {
        Card::Success => "Good job!",
        Card::Fail => "Why did you have to fail :(.",
        _ => "I see a bus in your future.",
    };
    format!("You have played a {card}. {flavor}")
}

/// Popover text for a resolved mission.
///
/// With `legacy_separator` every card is followed by ", " (including the
/// last one), matching what older clients showed.
pub fn mission_popover(record: &MissionRecord, legacy_separator: bool) -> String {
    let mut text = format!(
        "Players: {}<br />Cards Played: ",
        roster_with_count(&record.members)
    );
    let cards: Vec<&str> = record.cards_played.iter().map(Card::display_name).collect();
    if legacy_separator {
        for card in cards {
            text.push_str(card);
            text.push_str(", ");
        }
    } else {
        text.push_str(&cards.join(", "));
    }
    text
}

pub fn game_over_sentence(winner: Team) -> String {
    format!("Game over. The {winner} team wins.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use thavalon_domain::MissionResult;

    fn names(list: &[&str]) -> Vec<PlayerName> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_roster_join_rule() {
        assert_eq!(roster_with_count(&names(&["Dan"])), "and Dan (1)");
        assert_eq!(roster_with_count(&names(&["Dan", "Eve"])), "Dan and Eve (2)");
        assert_eq!(
            roster_with_count(&names(&["Amy", "Ben", "Cal"])),
            "Amy, Ben, and Cal (3)"
        );
        assert_eq!(
            roster_with_count(&names(&["Amy", "Ben", "Cal", "Dan", "Eve"])),
            "Amy, Ben, Cal, Dan, and Eve (5)"
        );
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_players(&[]), "");
    }

    #[test]
    fn test_proposer_framing() {
        assert_eq!(
            proposer_sentence(true, "Alice", 2),
            "You are proposing a 2 person mission."
        );
        assert_eq!(
            proposer_sentence(false, "Alice", 3),
            "Alice is proposing a 3 person mission."
        );
    }

    #[test]
    fn test_vote_confirmation_wording() {
        assert_eq!(
            vote_confirmation(Vote::Upvote),
            "You have upvoted. Please wait while others finish voting."
        );
        assert_eq!(
            vote_confirmation(Vote::Downvote),
            "You have downvoted. Please wait while others finish voting."
        );
    }

    #[test]
    fn test_role_information_block() {
        assert_eq!(
            role_information_block("Percival sees Merlin"),
            "-------------------------\r\nPercival sees Merlin\r\n-------------------------"
        );
    }

    #[test]
    fn test_card_played_flavor() {
        assert_eq!(
            card_played_sentence(&Card::Success),
            "You have played a Success. Good job!"
        );
        assert!(card_played_sentence(&Card::Fail).starts_with("You have played a Fail. "));
        assert_eq!(
            card_played_sentence(&Card::Reverse),
            "You have played a Reverse. I see a bus in your future."
        );
    }

    #[test]
    fn test_mission_popover_legacy_and_trimmed() {
        let record = MissionRecord::new(
            1,
            MissionResult::Fail,
            names(&["Dan", "Eve"]),
            vec![Card::Fail, Card::Success],
        )
        .expect("valid record");

        assert_eq!(
            mission_popover(&record, true),
            "Players: Dan and Eve (2)<br />Cards Played: Fail, Success, "
        );
        assert_eq!(
            mission_popover(&record, false),
            "Players: Dan and Eve (2)<br />Cards Played: Fail, Success"
        );
    }

    #[test]
    fn test_spectating_sentence() {
        assert_eq!(
            spectating_sentence(&names(&["Amy", "Ben", "Cal"])),
            "Please wait while Amy, Ben, and Cal go on a mission."
        );
    }
}
