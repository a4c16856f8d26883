//! Metadata-driven storage access pipeline for stateprobe.
//!
//! Given a pallet name, a storage entry name and raw key bytes, this crate
//! resolves the entry against runtime metadata, builds the hashed storage
//! key, performs one windowed read against a state backend and packs the
//! outcome into a flag-plus-bytes result:
//!
//! - `key`: storage key construction (name prefixes, per-key hashing)
//! - `reader`: windowed reads, declared-default instantiation, raw-key reads
//! - `result`: the access outcome and its boundary serialization
//! - `accessor`: the pipeline itself and its four entry points
//! - `call`: the encoded request/response boundary
//! - `provider`: loading runtime metadata from the state under inspection

mod accessor;
pub mod call;
pub mod key;
pub mod provider;
pub mod reader;
pub mod result;

// Re-export commonly used types
pub use accessor::StorageAccessor;
pub use call::{dispatch, handle_call, AccessRequest, CallError};
pub use key::{entry_prefix, storage_key, KeyError, StorageKey};
pub use provider::{encode_metadata, load_metadata, MetadataError, METADATA_KEY};
pub use reader::{read_entry, read_raw};
pub use result::AccessResult;
