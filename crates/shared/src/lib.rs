//! THavalon Protocol - Shared types for server and player communication
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient inbound decoding** - Unknown message types and unknown card
//!    tags never fail deserialization

pub mod messages;

pub use messages::{ClientMessage, MissionSummary, ServerMessage, VoteEntry};
