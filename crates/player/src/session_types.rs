//! Session context shared by every component of a game session
//!
//! Constructed once when the session starts and passed by reference (as an
//! `Arc`) to whatever needs to know who the local player is. There is no
//! global lookup.

use thavalon_domain::PlayerName;

/// Identity of the local player within one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    local_player: PlayerName,
    game_id: String,
}

impl SessionContext {
    pub fn new(local_player: impl Into<PlayerName>, game_id: impl Into<String>) -> Self {
        Self {
            local_player: local_player.into(),
            game_id: game_id.into(),
        }
    }

    pub fn local_player(&self) -> &str {
        &self.local_player
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn is_local(&self, name: &str) -> bool {
        self.local_player == name
    }

    /// Position of the local player in a proposal order
    pub fn index_in(&self, order: &[PlayerName]) -> Option<usize> {
        order.iter().position(|name| self.is_local(name))
    }
}
