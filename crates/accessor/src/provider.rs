//! Runtime metadata provisioning.
//!
//! The chain keeps its current storage metadata in state, under a well-known
//! raw key. Loading it through the same backend a request reads values from
//! guarantees the resolved entries belong to that state's runtime version —
//! metadata is never cached across requests.

use stateprobe_core::RuntimeMetadata;
use stateprobe_storage::{StateBackend, StorageError};
use thiserror::Error;

/// Well-known raw state key holding the bincode-encoded runtime metadata.
pub const METADATA_KEY: &[u8] = b":metadata";

/// Errors from metadata provisioning.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    /// The blob under [`METADATA_KEY`] did not decode. This is state
    /// corruption, not absence.
    #[error("malformed metadata blob: {0}")]
    Codec(#[from] bincode::Error),
}

/// Fetches and decodes the runtime metadata from the state itself.
///
/// `None` means the store carries no metadata at all.
pub fn load_metadata<B: StateBackend + ?Sized>(
    backend: &B,
) -> Result<Option<RuntimeMetadata>, MetadataError> {
    match backend.get(METADATA_KEY)? {
        Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
        None => Ok(None),
    }
}

/// Encodes metadata for installation under [`METADATA_KEY`].
pub fn encode_metadata(metadata: &RuntimeMetadata) -> Result<Vec<u8>, MetadataError> {
    Ok(bincode::serialize(metadata)?)
}
