//! The metadata-driven access pipeline.

use crate::key::storage_key;
use crate::reader::read_entry;
use crate::result::AccessResult;
use stateprobe_core::{ReadWindow, RuntimeMetadata};
use stateprobe_storage::{Result, StateBackend};
use tracing::debug;

/// One request's binding of runtime metadata to a state backend.
///
/// Both references belong to a single query context: the metadata must be the
/// one in effect for the state being read (runtime upgrades change it), so an
/// accessor is constructed fresh per request and holds no other state.
///
/// The four entry points differ only in the window they request; all of them
/// run the same pipeline: resolve the pallet/entry pair, build the storage
/// key, perform one windowed read, pack the outcome. An unknown pallet/entry
/// or a rejected key count short-circuits to [`AccessResult::unresolved`];
/// only backend failures surface as errors.
pub struct StorageAccessor<'a, B: StateBackend + ?Sized> {
    metadata: &'a RuntimeMetadata,
    backend: &'a B,
}

impl<'a, B: StateBackend + ?Sized> StorageAccessor<'a, B> {
    pub fn new(metadata: &'a RuntimeMetadata, backend: &'a B) -> Self {
        Self { metadata, backend }
    }

    /// Reads the whole value.
    pub fn get(
        &self,
        pallet: &str,
        item: &str,
        keys: &[Vec<u8>],
        key_count: usize,
    ) -> Result<AccessResult> {
        self.access(pallet, item, keys, key_count, ReadWindow::full())
    }

    /// Reads from `offset` to the end of the value.
    pub fn get_at(
        &self,
        pallet: &str,
        item: &str,
        keys: &[Vec<u8>],
        key_count: usize,
        offset: u32,
    ) -> Result<AccessResult> {
        self.access(pallet, item, keys, key_count, ReadWindow::at(offset))
    }

    /// Reads at most the first `len` bytes.
    pub fn get_len(
        &self,
        pallet: &str,
        item: &str,
        keys: &[Vec<u8>],
        key_count: usize,
        len: u32,
    ) -> Result<AccessResult> {
        self.access(pallet, item, keys, key_count, ReadWindow::take(len))
    }

    /// Reads at most `len` bytes starting at `offset`.
    pub fn get_range(
        &self,
        pallet: &str,
        item: &str,
        keys: &[Vec<u8>],
        key_count: usize,
        offset: u32,
        len: u32,
    ) -> Result<AccessResult> {
        self.access(pallet, item, keys, key_count, ReadWindow::range(offset, len))
    }

    fn access(
        &self,
        pallet: &str,
        item: &str,
        keys: &[Vec<u8>],
        key_count: usize,
        window: ReadWindow,
    ) -> Result<AccessResult> {
        let Some(entry) = self.metadata.resolve(pallet, item) else {
            debug!(pallet, item, "storage entry not found in metadata");
            return Ok(AccessResult::unresolved());
        };

        let key = match storage_key(pallet, entry, keys, key_count) {
            Ok(key) => key,
            Err(err) => {
                debug!(pallet, item, %err, "storage key rejected");
                return Ok(AccessResult::unresolved());
            }
        };

        debug!(pallet, item, key = %key, ?window, "reading storage entry");

        Ok(match read_entry(self.backend, &key, &entry.modifier, window)? {
            Some(data) => AccessResult::value(data),
            None => AccessResult::missing(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stateprobe_core::{PalletMetadata, StorageEntryMetadata, StorageHasher};
    use stateprobe_storage::Storage;

    fn metadata() -> RuntimeMetadata {
        RuntimeMetadata::new(vec![PalletMetadata::new(
            "System",
            vec![
                StorageEntryMetadata::plain("Number"),
                StorageEntryMetadata::map("Account", StorageHasher::Blake2_128Concat),
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
    fn test_entry_points_differ_only_in_window() {
        let metadata = metadata();
        let storage = store_with_number(b"0123456789");
        let accessor = StorageAccessor::new(&metadata, &storage);

        let full = accessor.get("System", "Number", &[], 0).unwrap();
        assert_eq!(full.data, b"0123456789");

        let tail = accessor.get_at("System", "Number", &[], 0, 6).unwrap();
        assert_eq!(tail.data, b"6789");

        let head = accessor.get_len("System", "Number", &[], 0, 3).unwrap();
        assert_eq!(head.data, b"012");

        let mid = accessor.get_range("System", "Number", &[], 0, 2, 4).unwrap();
        assert_eq!(mid.data, b"2345");
    }

    #[test]
    fn test_unknown_names_are_unresolved() {
        let metadata = metadata();
        let storage = Storage::open_temporary().unwrap();
        let accessor = StorageAccessor::new(&metadata, &storage);

        let result = accessor.get("Balances", "Number", &[], 0).unwrap();
        assert_eq!(result, AccessResult::unresolved());

        let result = accessor.get("System", "Version", &[], 0).unwrap();
        assert_eq!(result, AccessResult::unresolved());
    }

    #[test]
    fn test_wrong_key_count_is_unresolved() {
        let metadata = metadata();
        let storage = Storage::open_temporary().unwrap();
        let accessor = StorageAccessor::new(&metadata, &storage);

        let result = accessor.get("System", "Number", &[vec![1]], 1).unwrap();
        assert_eq!(result, AccessResult::unresolved());

        let result = accessor.get("System", "Account", &[], 0).unwrap();
        assert_eq!(result, AccessResult::unresolved());
    }

    #[test]
    fn test_resolved_but_unwritten_is_missing() {
        let metadata = metadata();
        let storage = Storage::open_temporary().unwrap();
        let accessor = StorageAccessor::new(&metadata, &storage);

        let result = accessor.get("System", "Number", &[], 0).unwrap();
        assert_eq!(result, AccessResult::missing());
    }
}
