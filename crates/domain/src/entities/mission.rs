//! Mission records

use crate::{Card, DomainError, MissionResult, PlayerName};

/// A resolved mission as reported by the server.
///
/// `cards_played` is NOT aligned with `members`: it is a multiset, so only
/// count it, never zip it with the member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionRecord {
    /// 1-based mission number
    pub index: u8,
    pub result: MissionResult,
    pub members: Vec<PlayerName>,
    pub cards_played: Vec<Card>,
}

/// Tally of cards played on a mission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardCounts {
    pub successes: usize,
    pub fails: usize,
    pub reverses: usize,
    pub unrecognized: usize,
}

impl MissionRecord {
    pub fn new(
        index: u8,
        result: MissionResult,
        members: Vec<PlayerName>,
        cards_played: Vec<Card>,
    ) -> Result<Self, DomainError> {
        let record = Self {
            index,
            result,
            members,
            cards_played,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.index == 0 {
            return Err(DomainError::validation("Mission numbers start at 1"));
        }
        if self.members.is_empty() {
            return Err(DomainError::validation(format!(
                "Mission {} has no players",
                self.index
            )));
        }
        Ok(())
    }

    pub fn card_counts(&self) -> CardCounts {
        self.cards_played
            .iter()
            .fold(CardCounts::default(), |mut counts, card| {
                match card {
                    Card::Success => counts.successes += 1,
                    Card::Fail => counts.fails += 1,
                    Card::Reverse => counts.reverses += 1,
                    Card::Unrecognized(_) => counts.unrecognized += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_index_and_members() {
        assert!(MissionRecord::new(0, MissionResult::Pass, vec!["Dan".into()], vec![]).is_err());
        assert!(MissionRecord::new(1, MissionResult::Pass, vec![], vec![]).is_err());
        assert!(MissionRecord::new(1, MissionResult::Pass, vec!["Dan".into()], vec![]).is_ok());
    }

    #[test]
    fn test_card_counts_ignore_member_order() {
        let record = MissionRecord::new(
            2,
            MissionResult::Fail,
            vec!["Dan".into(), "Eve".into(), "Fay".into()],
            vec![Card::Fail, Card::Success, Card::from_tag("Joker")],
        )
        .expect("valid record");

        assert_eq!(
            record.card_counts(),
            CardCounts {
                successes: 1,
                fails: 1,
                reverses: 0,
                unrecognized: 1,
            }
        );
    }
}
