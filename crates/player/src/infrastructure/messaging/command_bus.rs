//! Command Bus for sending the player's actions to the game server.
//!
//! The CommandBus turns `GameActionPort` calls into `ClientMessage`s and
//! queues them on a bounded channel. A writer task on the other end owns the
//! transport.

use thavalon_domain::{Card, PlayerName, Vote};
use thavalon_shared::ClientMessage;
use tokio::sync::mpsc;

use crate::ports::outbound::{ActionError, GameActionPort};

/// Command bus for sending messages to the game server.
///
/// This is a concrete struct that can be cloned and shared. PhaseView only
/// sees it through `GameActionPort`.
#[derive(Clone)]
pub struct CommandBus {
    tx: mpsc::Sender<ClientMessage>,
}

impl CommandBus {
    pub fn new(tx: mpsc::Sender<ClientMessage>) -> Self {
        Self { tx }
    }

    /// Create a bus together with the receiver the writer task drains
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ClientMessage>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    fn enqueue(&self, message: ClientMessage) -> Result<(), ActionError> {
        self.tx.try_send(message).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => ActionError::ChannelFull,
            mpsc::error::TrySendError::Closed(_) => ActionError::ChannelClosed,
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl GameActionPort for CommandBus {
    fn submit_proposal(&self, players: &[PlayerName], within_cap: bool) -> Result<(), ActionError> {
        self.enqueue(ClientMessage::SubmitProposal {
            players: players.to_vec(),
            within_cap,
        })
    }

    fn submit_vote(&self, vote: Vote) -> Result<(), ActionError> {
        self.enqueue(ClientMessage::SubmitVote {
            upvote: vote.is_upvote(),
        })
    }

    fn play_card(&self, card: &Card) -> Result<(), ActionError> {
        self.enqueue(ClientMessage::PlayCard {
            card: card.display_name().to_string(),
        })
    }
}
