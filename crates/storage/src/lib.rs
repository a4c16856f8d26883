//! State storage layer for stateprobe.
//!
//! This crate provides the raw key-value side of the access pipeline:
//! - `Storage`: a sled wrapper holding the chain's state as opaque bytes
//! - `StateBackend`: the read-only trait the accessor reads through,
//!   including windowed reads that avoid copying unrequested bytes
//!
//! Values are stored and returned as raw bytes; interpreting them is the
//! caller's concern.

pub mod backend;
pub mod db;

// Re-export commonly used types
pub use backend::StateBackend;
pub use db::{Result, Storage, StorageError};
