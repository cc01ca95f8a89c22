//! Repository traits for domain layer.

pub mod sessions;

pub use sessions::{NewSession, SessionStore, StoredSession};
