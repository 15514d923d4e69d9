//! Byte-level encoding of the entry collection.
//!
//! The on-disk representation is a pretty-printed JSON array of entry
//! objects. Timestamps are RFC 3339 UTC instants, so a decode→encode
//! round-trip is lossless to the instant (field ordering may normalize, the
//! bytes need not be identical).

use super::types::DreamEntry;

/// Error type for the entry codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The bytes do not parse into a valid entry collection.
    #[error("malformed journal data: {0}")]
    MalformedData(#[from] serde_json::Error),
}

/// Encode the full entry collection to bytes.
pub fn encode_entries(entries: &[DreamEntry]) -> Result<Vec<u8>, CodecError> {
    let json = serde_json::to_vec_pretty(entries)?;
    Ok(json)
}

/// Decode an entry collection from bytes.
///
/// Fails with [`CodecError::MalformedData`] if the bytes are not a JSON array
/// of well-formed entries; never returns a partially populated collection.
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<DreamEntry>, CodecError> {
    let entries = serde_json::from_slice(bytes)?;
    Ok(entries)
}
