//! Storage key hashing.
//!
//! Storage addresses are built from two hash families: xxHash64-based "twox"
//! digests (fast, non-cryptographic, used for trusted inputs such as pallet
//! and entry names) and Blake2b digests (used where key material is
//! attacker-controlled). The exact byte layout of every digest is a frozen
//! contract: changing it would re-address every value already in the store.

use serde::{Deserialize, Serialize};

/// How a raw map key is transformed before being appended to a storage key.
///
/// The `*Concat` variants append the original key bytes after the digest, so
/// the raw key can be recovered from a stored key. The plain variants keep
/// only the digest; `Identity` performs no hashing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageHasher {
    /// 128-bit Blake2b digest of the key.
    Blake2_128,
    /// 256-bit Blake2b digest of the key.
    Blake2_256,
    /// 128-bit Blake2b digest followed by the key itself.
    Blake2_128Concat,
    /// 128-bit twox digest of the key.
    Twox128,
    /// 256-bit twox digest of the key.
    Twox256,
    /// 64-bit twox digest followed by the key itself.
    Twox64Concat,
    /// The key bytes, unchanged.
    Identity,
}

impl StorageHasher {
    /// Digest length in bytes, excluding any appended key material.
    pub fn digest_len(&self) -> usize {
        match self {
            StorageHasher::Blake2_128 => 16,
            StorageHasher::Blake2_256 => 32,
            StorageHasher::Blake2_128Concat => 16,
            StorageHasher::Twox128 => 16,
            StorageHasher::Twox256 => 32,
            StorageHasher::Twox64Concat => 8,
            StorageHasher::Identity => 0,
        }
    }

    /// Whether the original key bytes follow the digest in the output,
    /// making the raw key recoverable from the storage key.
    pub fn preserves_key(&self) -> bool {
        matches!(
            self,
            StorageHasher::Blake2_128Concat
                | StorageHasher::Twox64Concat
                | StorageHasher::Identity
        )
    }

    /// Applies this transform to raw key bytes.
    pub fn hash(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            StorageHasher::Blake2_128 => blake2_128(bytes).to_vec(),
            StorageHasher::Blake2_256 => blake2_256(bytes).to_vec(),
            StorageHasher::Blake2_128Concat => {
                let mut out = blake2_128(bytes).to_vec();
                out.extend_from_slice(bytes);
                out
            }
            StorageHasher::Twox128 => twox_128(bytes).to_vec(),
            StorageHasher::Twox256 => twox_256(bytes).to_vec(),
            StorageHasher::Twox64Concat => {
                let mut out = twox_64(bytes).to_vec();
                out.extend_from_slice(bytes);
                out
            }
            StorageHasher::Identity => bytes.to_vec(),
        }
    }
}

/// 64-bit twox digest: one xxHash64 round with seed 0, little-endian.
pub fn twox_64(data: &[u8]) -> [u8; 8] {
    xx64(data, 0).to_le_bytes()
}

/// 128-bit twox digest: xxHash64 rounds with seeds 0 and 1, concatenated
/// little-endian.
pub fn twox_128(data: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&xx64(data, 0).to_le_bytes());
    out[8..].copy_from_slice(&xx64(data, 1).to_le_bytes());
    out
}

/// 256-bit twox digest: xxHash64 rounds with seeds 0 through 3, concatenated
/// little-endian.
pub fn twox_256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for seed in 0..4u64 {
        let chunk = (seed as usize) * 8;
        out[chunk..chunk + 8].copy_from_slice(&xx64(data, seed).to_le_bytes());
    }
    out
}

/// 128-bit Blake2b digest.
pub fn blake2_128(data: &[u8]) -> [u8; 16] {
    use blake2::digest::consts::U16;
    use blake2::{Blake2b, Digest};

    let mut out = [0u8; 16];
    out.copy_from_slice(&Blake2b::<U16>::digest(data));
    out
}

/// 256-bit Blake2b digest.
pub fn blake2_256(data: &[u8]) -> [u8; 32] {
    use blake2::digest::consts::U32;
    use blake2::{Blake2b, Digest};

    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake2b::<U32>::digest(data));
    out
}

fn xx64(data: &[u8], seed: u64) -> u64 {
    use std::hash::Hasher;

    let mut hasher = twox_hash::XxHash64::with_seed(seed);
    hasher.write(data);
    hasher.finish()
}
