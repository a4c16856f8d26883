//! Byte-level call boundary.
//!
//! External collaborators (a contract-call dispatch layer, a transport
//! adapter) talk to the accessor through encoded buffers: a bincode-encoded
//! [`AccessRequest`] in, the [`AccessResult`] boundary encoding out. The
//! request carries a fixed two-slot key array regardless of the entry's
//! arity; `key_count` says how many slots are meant, and surplus slots never
//! contribute to the lookup.

use crate::accessor::StorageAccessor;
use crate::result::AccessResult;
use serde::{Deserialize, Serialize};
use stateprobe_core::RuntimeMetadata;
use stateprobe_storage::{StateBackend, StorageError};
use thiserror::Error;
use tracing::debug;

/// Errors crossing the call boundary.
///
/// A lookup that merely fails to resolve is not an error — it encodes as a
/// not-found response. Only a buffer that cannot be decoded or a backend
/// failure aborts the call.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("malformed request: {0}")]
    Decode(#[from] bincode::Error),
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

/// One storage access request as seen at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub pallet: String,
    pub item: String,
    /// How many of the key slots below are in use (0, 1 or 2).
    pub key_count: u8,
    pub key1: Vec<u8>,
    pub key2: Vec<u8>,
    pub offset: Option<u32>,
    pub len: Option<u32>,
}

impl AccessRequest {
    /// A plain (keyless) lookup of the whole value.
    pub fn plain(pallet: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            pallet: pallet.into(),
            item: item.into(),
            key_count: 0,
            key1: Vec::new(),
            key2: Vec::new(),
            offset: None,
            len: None,
        }
    }

    /// A single-key map lookup.
    pub fn map(pallet: impl Into<String>, item: impl Into<String>, key1: Vec<u8>) -> Self {
        Self {
            key_count: 1,
            key1,
            ..Self::plain(pallet, item)
        }
    }

    /// A double-key map lookup.
    pub fn double_map(
        pallet: impl Into<String>,
        item: impl Into<String>,
        key1: Vec<u8>,
        key2: Vec<u8>,
    ) -> Self {
        Self {
            key_count: 2,
            key1,
            key2,
            ..Self::plain(pallet, item)
        }
    }

    /// Starts the read at `offset`.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Caps the read at `len` bytes.
    pub fn with_len(mut self, len: u32) -> Self {
        self.len = Some(len);
        self
    }

    /// Encodes for the wire.
    pub fn encode(&self) -> Result<Vec<u8>, CallError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a request buffer.
    pub fn decode(bytes: &[u8]) -> Result<Self, CallError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Routes a request to the entry point matching its window parameters.
pub fn dispatch<B: StateBackend + ?Sized>(
    accessor: &StorageAccessor<'_, B>,
    request: &AccessRequest,
) -> Result<AccessResult, StorageError> {
    let keys = [request.key1.clone(), request.key2.clone()];
    let count = request.key_count as usize;

    match (request.offset, request.len) {
        (None, None) => accessor.get(&request.pallet, &request.item, &keys, count),
        (Some(offset), None) => accessor.get_at(&request.pallet, &request.item, &keys, count, offset),
        (None, Some(len)) => accessor.get_len(&request.pallet, &request.item, &keys, count, len),
        (Some(offset), Some(len)) => {
            accessor.get_range(&request.pallet, &request.item, &keys, count, offset, len)
        }
    }
}

/// Serves one encoded call: decode the request, run the pipeline against the
/// given metadata and backend, encode the result.
pub fn handle_call<B: StateBackend + ?Sized>(
    metadata: &RuntimeMetadata,
    backend: &B,
    input: &[u8],
) -> Result<Vec<u8>, CallError> {
    let request = AccessRequest::decode(input)?;
    debug!(
        pallet = %request.pallet,
        item = %request.item,
        key_count = request.key_count,
        offset = ?request.offset,
        len = ?request.len,
        "handling storage access call"
    );

    let accessor = StorageAccessor::new(metadata, backend);
    let result = dispatch(&accessor, &request)?;
    Ok(result.encode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::storage_key;
    use stateprobe_core::{PalletMetadata, StorageEntryMetadata, StorageHasher};
    use stateprobe_storage::Storage;

    fn metadata() -> RuntimeMetadata {
        RuntimeMetadata::new(vec![PalletMetadata::new(
            "System",
            vec![
                StorageEntryMetadata::plain("Number"),
                StorageEntryMetadata::map("Account", StorageHasher::Twox64Concat),
            ],
        )])
    }

    fn store_with_number(value: &[u8]) -> Storage {
        let storage = Storage::open_temporary().unwrap();
        let entry = StorageEntryMetadata::plain("Number");
        let key = storage_key("System", &entry, &[], 0).unwrap();
        storage.insert(key.as_bytes(), value).unwrap();
        storage
    }

    #[test]
    fn test_request_encode_roundtrip() {
        let request = AccessRequest::double_map("System", "Account", vec![1, 2], vec![3])
            .with_offset(4)
            .with_len(16);

        let decoded = AccessRequest::decode(&request.encode().unwrap()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_dispatch_applies_window_params() {
        let metadata = metadata();
        let storage = store_with_number(b"0123456789");
        let accessor = StorageAccessor::new(&metadata, &storage);

        let request = AccessRequest::plain("System", "Number");
        assert_eq!(dispatch(&accessor, &request).unwrap().data, b"0123456789");

        let request = AccessRequest::plain("System", "Number").with_offset(6);
        assert_eq!(dispatch(&accessor, &request).unwrap().data, b"6789");

        let request = AccessRequest::plain("System", "Number").with_len(3);
        assert_eq!(dispatch(&accessor, &request).unwrap().data, b"012");

        let request = AccessRequest::plain("System", "Number")
            .with_offset(2)
            .with_len(4);
        assert_eq!(dispatch(&accessor, &request).unwrap().data, b"2345");
    }

    #[test]
    fn test_handle_call_roundtrip() {
        let metadata = metadata();
        let storage = store_with_number(&7u32.to_le_bytes());

        let input = AccessRequest::plain("System", "Number").encode().unwrap();
        let output = handle_call(&metadata, &storage, &input).unwrap();

        let result = AccessResult::decode(&output);
        assert!(result.found);
        assert_eq!(result.data, 7u32.to_le_bytes());
    }

    #[test]
    fn test_handle_call_unresolved_is_not_found_on_the_wire() {
        let metadata = metadata();
        let storage = Storage::open_temporary().unwrap();

        let input = AccessRequest::plain("Nonexistent", "Number").encode().unwrap();
        let output = handle_call(&metadata, &storage, &input).unwrap();
        assert_eq!(output, vec![0]);
    }

    #[test]
    fn test_handle_call_rejects_malformed_input() {
        let metadata = metadata();
        let storage = Storage::open_temporary().unwrap();

        let result = handle_call(&metadata, &storage, &[0xff; 3]);
        assert!(matches!(result, Err(CallError::Decode(_))));
    }
}
