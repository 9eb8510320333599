//! Entities - game records identified by their place in the session

mod mission;
mod proposal;
mod role;
mod vote_tally;

pub use mission::{CardCounts, MissionRecord};
pub use proposal::Proposal;
pub use role::RoleInfo;
pub use vote_tally::{TallyEntry, VoteTally};
