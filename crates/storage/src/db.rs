//! sled database wrapper for raw state storage.

use sled::{Db, IVec};
use std::path::Path;
use thiserror::Error;

/// Storage errors.
///
/// A read either succeeds, misses, or fails hard; there is no transient
/// failure mode and nothing here is retried.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sled::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Wrapper around a sled database holding the chain's key-value state.
///
/// Keys and values are opaque byte sequences; storage addressing and value
/// decoding both live above this layer.
pub struct Storage {
    db: Db,
}

impl Storage {
    /// Open a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Open an in-memory database (for testing).
    pub fn open_temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Fetch the value stored under a key.
    ///
    /// The returned `IVec` is sled's reference-counted buffer; callers that
    /// only need part of the value can slice it without copying the rest.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<IVec>> {
        Ok(self.db.get(key)?)
    }

    /// Store raw value bytes under a key.
    ///
    /// Used by tooling that populates a store; the access pipeline itself
    /// never writes.
    pub fn insert<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> Result<()> {
        self.db.insert(key, value)?;
        Ok(())
    }

    /// Check if a key exists.
    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> Result<bool> {
        Ok(self.db.contains_key(key)?)
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}
