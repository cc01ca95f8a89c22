//! Adapters for external dependencies.

pub mod sessions_memory;

pub use sessions_memory::MemorySessionStore;
