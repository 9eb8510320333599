//! Host document adapters

pub mod memory;

pub use memory::MemoryDocument;
