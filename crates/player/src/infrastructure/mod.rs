pub mod document;
pub mod message_translator;
pub mod messaging;

#[cfg(test)]
pub mod testing;

// Re-export messaging types
pub use document::MemoryDocument;
pub use message_translator::{translate, Inbound};
pub use messaging::CommandBus;
