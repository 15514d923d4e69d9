//! Persistence layer for the dream journal.
//!
//! # Overview
//!
//! All journal data lives in a single JSON file under the app's data
//! directory:
//!
//! ```text
//! ~/.local/share/nocturne/         (or platform equivalent)
//! └── dreams.json                  # Full entry collection
//! ```
//!
//! # Design Principles
//!
//! ## Atomic Writes
//!
//! Every save uses write-then-rename to prevent corruption:
//!
//! 1. Write the full collection to `dreams.json.tmp`
//! 2. Rename to `dreams.json` (atomic on Unix)
//!
//! A crash mid-write never leaves a partial file visible to `load`.
//!
//! ## Full-State Writes
//!
//! The collection is small (one entry per night), so each save writes the
//! whole set. The last completed write determines the on-disk content.
//!
//! ## Quarantine on Corruption
//!
//! An unreadable `dreams.json` is renamed to `dreams.json.corrupt` before the
//! store continues with an empty collection, so the bytes survive for manual
//! recovery instead of being overwritten by the next save.

pub mod backend;
pub mod codec;
pub mod types;

pub use backend::{JournalBackend, StorageError};
pub use codec::{decode_entries, encode_entries, CodecError};
pub use types::DreamEntry;
