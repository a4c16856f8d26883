//! Read-only state backend abstraction.

use crate::db::{Result, Storage};
use stateprobe_core::ReadWindow;

/// A point-in-time, read-only view of the chain's key-value state.
///
/// Implementations must serve consistent reads for the lifetime of a single
/// request: the access pipeline performs exactly one lookup per request and
/// never writes. I/O failures must surface as errors, never as absence.
pub trait StateBackend {
    /// Fetch the full value stored under `key`.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Fetch `window` of the value stored under `key`.
    ///
    /// `Some` with an empty vector means the key exists but the window falls
    /// entirely outside the value. The default implementation fetches the
    /// full value and slices; backends that can avoid materializing unread
    /// bytes should override it.
    fn read_window(&self, key: &[u8], window: ReadWindow) -> Result<Option<Vec<u8>>> {
        Ok(self.get(key)?.map(|value| window.slice(&value).to_vec()))
    }
}

impl StateBackend for Storage {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(Storage::get(self, key)?.map(|value| value.to_vec()))
    }

    // sled hands back a reference-counted buffer, so only the windowed
    // bytes are copied out.
    fn read_window(&self, key: &[u8], window: ReadWindow) -> Result<Option<Vec<u8>>> {
        Ok(Storage::get(self, key)?.map(|value| window.slice(&value).to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_with(key: &[u8], value: &[u8]) -> Storage {
        let storage = Storage::open_temporary().unwrap();
        storage.insert(key, value).unwrap();
        storage
    }

    #[test]
    fn test_get_full_value() {
        let storage = backend_with(b"k", b"0123456789");
        let value = StateBackend::get(&storage, b"k").unwrap().unwrap();
        assert_eq!(value, b"0123456789");
    }

    #[test]
    fn test_absent_key_is_none_for_any_window() {
        let storage = Storage::open_temporary().unwrap();
        assert!(StateBackend::get(&storage, b"k").unwrap().is_none());
        assert!(storage
            .read_window(b"k", ReadWindow::range(3, 5))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_windowed_read_clips() {
        let storage = backend_with(b"k", b"0123456789");

        let tail = storage.read_window(b"k", ReadWindow::at(6)).unwrap().unwrap();
        assert_eq!(tail, b"6789");

        let head = storage.read_window(b"k", ReadWindow::take(3)).unwrap().unwrap();
        assert_eq!(head, b"012");

        let mid = storage
            .read_window(b"k", ReadWindow::range(2, 4))
            .unwrap()
            .unwrap();
        assert_eq!(mid, b"2345");
    }

    #[test]
    fn test_window_past_end_is_found_but_empty() {
        let storage = backend_with(b"k", b"0123456789");
        let value = storage.read_window(b"k", ReadWindow::at(50)).unwrap();
        assert_eq!(value, Some(Vec::new()));
    }
}
