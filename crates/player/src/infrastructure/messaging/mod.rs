//! Outbound messaging infrastructure.
//!
//! - `CommandBus`: queues the player's actions for the transport writer

pub mod command_bus;

pub use command_bus::CommandBus;
