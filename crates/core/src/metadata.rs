//! Runtime storage metadata model and lookup.
//!
//! Metadata describes where values live, not what they contain: each pallet
//! exposes named storage entries, and each entry declares how many keys it
//! takes, how each key is hashed, and what an absent value reads as. Value
//! types stay opaque here; callers decode the returned bytes themselves.
//!
//! Metadata can change across runtime upgrades, so a [`RuntimeMetadata`]
//! value always belongs to one query context. It is obtained fresh per
//! request (from the state under inspection or from a file) and never cached
//! process-wide.

use crate::hasher::StorageHasher;
use serde::{Deserialize, Serialize};

/// Shape of a storage entry: how many keys it takes and how each is hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageShape {
    /// A single value with no keys.
    Plain,
    /// A map from one hashed key.
    Map { hasher: StorageHasher },
    /// A map from two hashed keys.
    DoubleMap {
        hasher1: StorageHasher,
        hasher2: StorageHasher,
    },
}

impl StorageShape {
    /// Number of raw keys a caller must supply to address one value.
    pub fn arity(&self) -> usize {
        match self {
            StorageShape::Plain => 0,
            StorageShape::Map { .. } => 1,
            StorageShape::DoubleMap { .. } => 2,
        }
    }
}

/// What reading an unwritten entry yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageEntryModifier {
    /// Unwritten entries read as absent.
    Optional,
    /// Unwritten entries read as these declared default bytes.
    Default(Vec<u8>),
}

/// Metadata for one named storage entry within a pallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntryMetadata {
    pub name: String,
    pub modifier: StorageEntryModifier,
    pub shape: StorageShape,
}

impl StorageEntryMetadata {
    /// A plain (keyless) entry that reads as absent when unwritten.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: StorageEntryModifier::Optional,
            shape: StorageShape::Plain,
        }
    }

    /// A single-key map entry.
    pub fn map(name: impl Into<String>, hasher: StorageHasher) -> Self {
        Self {
            name: name.into(),
            modifier: StorageEntryModifier::Optional,
            shape: StorageShape::Map { hasher },
        }
    }

    /// A double-key map entry.
    pub fn double_map(
        name: impl Into<String>,
        hasher1: StorageHasher,
        hasher2: StorageHasher,
    ) -> Self {
        Self {
            name: name.into(),
            modifier: StorageEntryModifier::Optional,
            shape: StorageShape::DoubleMap { hasher1, hasher2 },
        }
    }

    /// Declares default bytes for unwritten entries.
    pub fn with_default(mut self, default: Vec<u8>) -> Self {
        self.modifier = StorageEntryModifier::Default(default);
        self
    }
}

/// Storage metadata for one pallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalletMetadata {
    pub name: String,
    pub entries: Vec<StorageEntryMetadata>,
}

impl PalletMetadata {
    pub fn new(name: impl Into<String>, entries: Vec<StorageEntryMetadata>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Finds a storage entry by its exact name.
    pub fn entry(&self, name: &str) -> Option<&StorageEntryMetadata> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// Storage metadata for a whole runtime, as of one runtime version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeMetadata {
    pub pallets: Vec<PalletMetadata>,
}

impl RuntimeMetadata {
    pub fn new(pallets: Vec<PalletMetadata>) -> Self {
        Self { pallets }
    }

    /// Finds a pallet by its exact name.
    pub fn pallet(&self, name: &str) -> Option<&PalletMetadata> {
        self.pallets.iter().find(|pallet| pallet.name == name)
    }

    /// Looks up a pallet/entry pair.
    ///
    /// A missing pallet and a missing entry within an existing pallet are
    /// indistinguishable: both are `None`. Callers only learn that the
    /// lookup did not resolve.
    pub fn resolve(&self, pallet: &str, entry: &str) -> Option<&StorageEntryMetadata> {
        self.pallet(pallet)?.entry(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuntimeMetadata {
        RuntimeMetadata::new(vec![
            PalletMetadata::new(
                "System",
                vec![
                    StorageEntryMetadata::plain("Number"),
                    StorageEntryMetadata::map("Account", StorageHasher::Blake2_128Concat),
                ],
            ),
            PalletMetadata::new(
                "Tokens",
                vec![StorageEntryMetadata::double_map(
                    "Approvals",
                    StorageHasher::Blake2_128Concat,
                    StorageHasher::Twox64Concat,
                )
                .with_default(vec![0u8; 16])],
            ),
        ])
    }

    #[test]
    fn test_resolve_existing_entry() {
        let metadata = sample();
        let entry = metadata.resolve("System", "Number").unwrap();
        assert_eq!(entry.shape, StorageShape::Plain);
        assert_eq!(entry.modifier, StorageEntryModifier::Optional);
    }

    #[test]
    fn test_missing_pallet_and_entry_are_indistinguishable() {
        let metadata = sample();
        assert_eq!(metadata.resolve("Balances", "Number"), None);
        assert_eq!(metadata.resolve("System", "Version"), None);
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        let metadata = sample();
        assert!(metadata.resolve("system", "Number").is_none());
        assert!(metadata.resolve("System", "number").is_none());
    }

    #[test]
    fn test_arity_per_shape() {
        let metadata = sample();
        assert_eq!(metadata.resolve("System", "Number").unwrap().shape.arity(), 0);
        assert_eq!(metadata.resolve("System", "Account").unwrap().shape.arity(), 1);
        assert_eq!(
            metadata.resolve("Tokens", "Approvals").unwrap().shape.arity(),
            2
        );
    }

    #[test]
    fn test_declared_default_is_carried() {
        let metadata = sample();
        let entry = metadata.resolve("Tokens", "Approvals").unwrap();
        assert_eq!(entry.modifier, StorageEntryModifier::Default(vec![0u8; 16]));
    }

    #[test]
    fn test_json_roundtrip() {
        let metadata = sample();
        let json = serde_json::to_string(&metadata).unwrap();
        let back: RuntimeMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }
}
