//! Windowed value reads against a state backend.

use crate::key::StorageKey;
use crate::result::AccessResult;
use stateprobe_core::{ReadWindow, StorageEntryModifier};
use stateprobe_storage::{Result, StateBackend};

/// Reads `window` of the value addressed by `key`, honoring the entry's
/// declared default.
///
/// An unwritten entry of a `Default` item reads as present, with the window
/// applied to the declared default bytes; an unwritten `Optional` entry
/// reads as `None`. Backend failures propagate as errors and are never
/// reported as absence.
pub fn read_entry<B: StateBackend + ?Sized>(
    backend: &B,
    key: &StorageKey,
    modifier: &StorageEntryModifier,
    window: ReadWindow,
) -> Result<Option<Vec<u8>>> {
    match backend.read_window(key.as_bytes(), window)? {
        Some(data) => Ok(Some(data)),
        None => match modifier {
            StorageEntryModifier::Default(default) => Ok(Some(window.slice(default).to_vec())),
            StorageEntryModifier::Optional => Ok(None),
        },
    }
}

/// Reads `window` of the value under an arbitrary raw storage key.
///
/// No metadata is consulted: the lookup always counts as resolved, and
/// absent keys read as absent even where some entry would declare a
/// default.
pub fn read_raw<B: StateBackend + ?Sized>(
    backend: &B,
    key: &[u8],
    window: ReadWindow,
) -> Result<AccessResult> {
    Ok(match backend.read_window(key, window)? {
        Some(data) => AccessResult::value(data),
        None => AccessResult::missing(),
    })
}
