//! Prior proposal vote tallies

use crate::{PlayerName, TalliedVote};

/// One player's entry in an attributed tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub player: PlayerName,
    pub vote: TalliedVote,
}

impl TallyEntry {
    pub fn new(player: impl Into<PlayerName>, vote: impl Into<TalliedVote>) -> Self {
        Self {
            player: player.into(),
            vote: vote.into(),
        }
    }
}

/// Results of the previous proposal vote.
///
/// When someone obscured the vote only aggregate counts are available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteTally {
    /// Per-player votes, in the order the server listed them
    Attributed(Vec<TallyEntry>),
    /// Aggregate counts with no attribution
    Obscured { upvotes: u32, downvotes: u32 },
}

impl VoteTally {
    pub fn is_obscured(&self) -> bool {
        matches!(self, VoteTally::Obscured { .. })
    }

    pub fn upvotes(&self) -> u32 {
        match self {
            VoteTally::Attributed(entries) => count(entries, &TalliedVote::Upvote),
            VoteTally::Obscured { upvotes, .. } => *upvotes,
        }
    }

    pub fn downvotes(&self) -> u32 {
        match self {
            VoteTally::Attributed(entries) => count(entries, &TalliedVote::Downvote),
            VoteTally::Obscured { downvotes, .. } => *downvotes,
        }
    }
}

fn count(entries: &[TallyEntry], vote: &TalliedVote) -> u32 {
    entries.iter().filter(|e| &e.vote == vote).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vote;

    #[test]
    fn test_attributed_counts() {
        let tally = VoteTally::Attributed(vec![
            TallyEntry::new("Alice", Vote::Upvote),
            TallyEntry::new("Bob", Vote::Downvote),
            TallyEntry::new("Carol", Vote::Upvote),
            TallyEntry::new("Dan", TalliedVote::from_code(9)),
        ]);
        assert!(!tally.is_obscured());
        assert_eq!(tally.upvotes(), 2);
        assert_eq!(tally.downvotes(), 1);
    }

    #[test]
    fn test_obscured_counts() {
        let tally = VoteTally::Obscured {
            upvotes: 3,
            downvotes: 2,
        };
        assert!(tally.is_obscured());
        assert_eq!(tally.upvotes(), 3);
        assert_eq!(tally.downvotes(), 2);
    }
}
