//! Value objects - Immutable objects defined by their attributes

mod card;
mod team;
mod vote;

pub use card::{Card, MissionResult};
pub use team::Team;
pub use vote::{TalliedVote, Vote};
