//! Access outcome packing and boundary serialization.

/// Outcome of one storage access.
///
/// Invariants: an unresolved lookup is never found, and `data` is empty
/// unless the value was found. Construct through [`unresolved`],
/// [`missing`] and [`value`] to keep them.
///
/// [`unresolved`]: AccessResult::unresolved
/// [`missing`]: AccessResult::missing
/// [`value`]: AccessResult::value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessResult {
    /// Whether the pallet/entry pair resolved and the key was well formed.
    pub resolved: bool,
    /// Whether the storage key held a value (or a declared default).
    pub found: bool,
    /// The windowed value bytes; empty unless `found`.
    pub data: Vec<u8>,
}

impl AccessResult {
    /// A lookup that failed to resolve: unknown pallet/entry or a rejected
    /// key count.
    pub fn unresolved() -> Self {
        Self {
            resolved: false,
            found: false,
            data: Vec::new(),
        }
    }

    /// A resolved lookup whose key holds no value.
    pub fn missing() -> Self {
        Self {
            resolved: true,
            found: false,
            data: Vec::new(),
        }
    }

    /// A resolved lookup that produced value bytes (possibly an empty
    /// window of an existing value).
    pub fn value(data: Vec<u8>) -> Self {
        Self {
            resolved: true,
            found: true,
            data,
        }
    }

    /// Serializes for the call boundary: one flag byte (1 = found) followed
    /// by the raw data with no length prefix. Consumers recover the data
    /// length from the buffer size.
    pub fn encode(&self) -> Vec<u8> {
        if !self.found {
            return vec![0];
        }

        let mut out = Vec::with_capacity(self.data.len() + 1);
        out.push(1);
        out.extend_from_slice(&self.data);
        out
    }

    /// Decodes a boundary buffer.
    ///
    /// A cleared flag byte carries no resolution detail: unresolved and
    /// missing lookups serialize alike, so both decode as unresolved.
    pub fn decode(bytes: &[u8]) -> Self {
        match bytes.first() {
            Some(1) => Self::value(bytes[1..].to_vec()),
            _ => Self::unresolved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_invariants() {
        let unresolved = AccessResult::unresolved();
        assert!(!unresolved.resolved && !unresolved.found && unresolved.data.is_empty());

        let missing = AccessResult::missing();
        assert!(missing.resolved && !missing.found && missing.data.is_empty());

        let value = AccessResult::value(vec![1, 2, 3]);
        assert!(value.resolved && value.found);
        assert_eq!(value.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_encode_found_value() {
        let encoded = AccessResult::value(vec![0xAA, 0xBB]).encode();
        assert_eq!(encoded, vec![1, 0xAA, 0xBB]);
    }

    #[test]
    fn test_encode_empty_window_of_existing_value() {
        // Found with no bytes is a legitimate outcome (offset past the end).
        assert_eq!(AccessResult::value(Vec::new()).encode(), vec![1]);
    }

    #[test]
    fn test_not_found_encodes_as_single_byte() {
        assert_eq!(AccessResult::missing().encode(), vec![0]);
        assert_eq!(AccessResult::unresolved().encode(), vec![0]);
    }

    #[test]
    fn test_decode_roundtrip() {
        let value = AccessResult::value(b"payload".to_vec());
        assert_eq!(AccessResult::decode(&value.encode()), value);

        assert_eq!(AccessResult::decode(&[1]), AccessResult::value(Vec::new()));
        assert_eq!(AccessResult::decode(&[0]), AccessResult::unresolved());
    }

    #[test]
    fn test_decode_garbage_is_unresolved() {
        assert_eq!(AccessResult::decode(&[]), AccessResult::unresolved());
        assert_eq!(AccessResult::decode(&[7, 1, 2]), AccessResult::unresolved());
    }
}
