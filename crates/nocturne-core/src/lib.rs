//! # nocturne-core
//!
//! Core record store for Nocturne, the dream journal.
//!
//! This crate is framework-agnostic and can be used by:
//! - Desktop app (via commands)
//! - Mobile shell (via FFI bindings)
//!
//! ## Key Concepts
//!
//! - **DreamEntry**: One journaled record (timestamp, narrative, symbol, mood)
//! - **DreamStore**: The authoritative in-memory collection with date-scoped
//!   queries and a background save worker
//! - **JournalBackend**: The single on-disk JSON file behind the store

pub mod catalog;
pub mod paths;
pub mod persistence;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use persistence::backend::JournalBackend;
pub use persistence::types::DreamEntry;
pub use stats::Period;
pub use store::DreamStore;
