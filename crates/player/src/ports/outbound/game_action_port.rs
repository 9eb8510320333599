//! Game Action Port - Outbound port for the player's game actions
//!
//! PhaseView never decides legality. It forwards what the player picked and
//! lets the server rule on it.

use thavalon_domain::{Card, PlayerName, Vote};
use thiserror::Error;

/// Failure to hand an action to the transport
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Outbound channel is closed")]
    ChannelClosed,

    #[error("Outbound channel is full")]
    ChannelFull,
}

/// Outbound port for submitting proposals, votes and cards.
///
/// Object-safe so PhaseView can hold an `Arc<dyn GameActionPort>`.
#[cfg_attr(test, mockall::automock)]
pub trait GameActionPort: Send + Sync {
    /// Submit the proposer's selection along with the picker's own cap check
    fn submit_proposal(&self, players: &[PlayerName], within_cap: bool)
        -> Result<(), ActionError>;

    /// Submit the local player's vote on the current proposal
    fn submit_vote(&self, vote: Vote) -> Result<(), ActionError>;

    /// Play a card on the current mission
    fn play_card(&self, card: &Card) -> Result<(), ActionError>;
}
