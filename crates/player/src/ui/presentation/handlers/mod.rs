//! Phase event handlers
//!
//! Each module adds the handlers for one part of the page to `PhaseView`.

mod game_end;
mod interactions;
mod mission;
mod player_order;
mod proposal;
mod role;
mod voting;
