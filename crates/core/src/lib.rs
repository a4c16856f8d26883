//! Storage addressing primitives for stateprobe.
//!
//! This crate provides the types shared across the access pipeline:
//! - Storage hashers (Blake2b and xxHash64 based key transforms)
//! - The runtime storage metadata model and pallet/entry lookup
//! - Byte windows over stored values

pub mod hasher;
pub mod metadata;
pub mod window;

// Re-export commonly used types at the crate root
pub use hasher::{blake2_128, blake2_256, twox_128, twox_256, twox_64, StorageHasher};
pub use metadata::{
    PalletMetadata, RuntimeMetadata, StorageEntryMetadata, StorageEntryModifier, StorageShape,
};
pub use window::ReadWindow;
