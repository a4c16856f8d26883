//! Byte windows over stored values.

use serde::{Deserialize, Serialize};

/// A sub-range of a stored value: a start offset plus an optional length.
///
/// Windows describe which bytes of a value the caller wants back; they say
/// nothing about whether the value exists. A window is always satisfiable:
/// it clips to the value's bounds rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadWindow {
    pub offset: u32,
    pub len: Option<u32>,
}

impl ReadWindow {
    pub fn new(offset: u32, len: Option<u32>) -> Self {
        Self { offset, len }
    }

    /// The whole value.
    pub fn full() -> Self {
        Self::new(0, None)
    }

    /// Everything from `offset` to the end of the value.
    pub fn at(offset: u32) -> Self {
        Self::new(offset, None)
    }

    /// At most the first `len` bytes.
    pub fn take(len: u32) -> Self {
        Self::new(0, Some(len))
    }

    /// At most `len` bytes starting at `offset`.
    pub fn range(offset: u32, len: u32) -> Self {
        Self::new(offset, Some(len))
    }

    /// Whether this window covers any value entirely.
    pub fn is_full(&self) -> bool {
        self.offset == 0 && self.len.is_none()
    }

    /// Applies the window to a value, clipping to its bounds.
    ///
    /// An offset at or past the end yields an empty slice; a length running
    /// past the end is truncated; no length means "to the end".
    pub fn slice<'a>(&self, value: &'a [u8]) -> &'a [u8] {
        let start = (self.offset as usize).min(value.len());
        let end = match self.len {
            Some(len) => start.saturating_add(len as usize).min(value.len()),
            None => value.len(),
        };
        &value[start..end]
    }
}

impl Default for ReadWindow {
    fn default() -> Self {
        Self::full()
    }
}
