//! Proposal entity - a proposer's pick of players for a mission attempt

use crate::{DomainError, PlayerName};

/// A single proposal within a round.
///
/// `members` stays empty until the proposer submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    /// Index into the game's proposal order
    pub proposer_index: usize,
    /// 1-indexed within the round
    pub proposal_number: u32,
    pub max_proposals: u32,
    pub mission_size: usize,
    pub members: Vec<PlayerName>,
}

impl Proposal {
    /// Create a proposal, checking its numeric invariants
    pub fn new(
        proposer_index: usize,
        proposal_number: u32,
        max_proposals: u32,
        mission_size: usize,
        members: Vec<PlayerName>,
    ) -> Result<Self, DomainError> {
        let proposal = Self {
            proposer_index,
            proposal_number,
            max_proposals,
            mission_size,
            members,
        };
        proposal.validate()?;
        Ok(proposal)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.proposal_number == 0 {
            return Err(DomainError::validation("Proposal numbers start at 1"));
        }
        if self.proposal_number > self.max_proposals {
            return Err(DomainError::validation(format!(
                "Proposal {} exceeds the round maximum of {}",
                self.proposal_number, self.max_proposals
            )));
        }
        if self.mission_size == 0 {
            return Err(DomainError::validation("Mission size cannot be zero"));
        }
        Ok(())
    }

    /// Whether this is the last proposal of the round
    pub fn is_final(&self) -> bool {
        self.proposal_number == self.max_proposals
    }

    /// Force is only ever shown on the final proposal, and only when the
    /// server says so.
    pub fn shows_force(&self, force_signaled: bool) -> bool {
        self.is_final() && force_signaled
    }

    /// Look up the proposer's name in the proposal order
    pub fn proposer<'a>(&self, order: &'a [PlayerName]) -> Result<&'a PlayerName, DomainError> {
        order
            .get(self.proposer_index)
            .ok_or_else(|| DomainError::out_of_range("Proposer", self.proposer_index, order.len()))
    }
}
