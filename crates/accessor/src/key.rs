//! Storage key construction.

use stateprobe_core::{twox_128, StorageEntryMetadata, StorageShape};
use std::fmt;
use thiserror::Error;

/// Errors from storage key construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The caller's key count does not match the entry's declared arity.
    /// A wrong count can only address a different logical entry, so it is
    /// rejected outright rather than truncated or padded.
    #[error("key count mismatch (entry takes {expected}, got {supplied})")]
    CountMismatch { expected: usize, supplied: usize },
}

/// A fully built storage key: the exact byte address of one value in the
/// state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(Vec<u8>);

impl StorageKey {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for StorageKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

/// The 32-byte prefix addressing a storage entry: the twox128 digest of the
/// pallet name followed by the twox128 digest of the entry name.
pub fn entry_prefix(pallet: &str, entry: &str) -> [u8; 32] {
    let mut prefix = [0u8; 32];
    prefix[..16].copy_from_slice(&twox_128(pallet.as_bytes()));
    prefix[16..].copy_from_slice(&twox_128(entry.as_bytes()));
    prefix
}

/// Builds the full storage key for an entry.
///
/// `key_count` is the number of raw keys the caller intends to use; it must
/// equal the entry's arity. `keys` may carry surplus trailing slots (callers
/// with a fixed-width key array pass them regardless); only the first
/// `key_count` entries contribute bytes. Output order is pallet prefix,
/// entry prefix, then key segments in declared order.
pub fn storage_key(
    pallet: &str,
    entry: &StorageEntryMetadata,
    keys: &[Vec<u8>],
    key_count: usize,
) -> Result<StorageKey, KeyError> {
    let expected = entry.shape.arity();
    if key_count != expected {
        return Err(KeyError::CountMismatch {
            expected,
            supplied: key_count,
        });
    }
    if keys.len() < expected {
        return Err(KeyError::CountMismatch {
            expected,
            supplied: keys.len(),
        });
    }

    let mut out = entry_prefix(pallet, &entry.name).to_vec();
    match &entry.shape {
        StorageShape::Plain => {}
        StorageShape::Map { hasher } => out.extend(hasher.hash(&keys[0])),
        StorageShape::DoubleMap { hasher1, hasher2 } => {
            out.extend(hasher1.hash(&keys[0]));
            out.extend(hasher2.hash(&keys[1]));
        }
    }

    Ok(StorageKey(out))
}
