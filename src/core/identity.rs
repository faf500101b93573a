//! Party Identities
//!
//! Every actor known to the registry (master, players, the registry itself)
//! is a 16-byte opaque identity. Implements Ord for deterministic BTreeMap
//! ordering.

use serde::{Serialize, Deserialize};
use sha2::{Sha256, Digest};

/// Domain separator for identities derived from subject strings.
const IDENTITY_DOMAIN: &[u8] = b"sealed-hangman-party:";

/// Unique party identifier (UUID as bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub struct PartyId(pub [u8; 16]);

impl PartyId {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create a fresh random identity.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().into_bytes())
    }

    /// Create from UUID string.
    pub fn from_uuid_str(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s)
            .ok()
            .map(|u| Self(*u.as_bytes()))
    }

    /// Derive a deterministic identity from a subject string.
    ///
    /// Uses SHA256 over a domain tag plus the subject, truncated to 16 bytes.
    /// The same subject always maps to the same identity.
    pub fn derive_from_subject(subject: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(IDENTITY_DOMAIN);
        hasher.update(subject.as_bytes());
        let hash = hasher.finalize();

        let mut id = [0u8; 16];
        id.copy_from_slice(&hash[..16]);
        Self(id)
    }

    /// Convert to UUID string.
    pub fn to_uuid_string(&self) -> String {
        uuid::Uuid::from_bytes(self.0).to_string()
    }

    /// Short hex form for log lines.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_id_ordering() {
        let id1 = PartyId::new([0; 16]);
        let id2 = PartyId::new([1; 16]);
        let id3 = PartyId::new([0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        assert!(id1 < id2);
        assert!(id1 < id3);
        assert!(id3 < id2);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = PartyId::derive_from_subject("alice");
        let b = PartyId::derive_from_subject("alice");
        let c = PartyId::derive_from_subject("bob");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_uuid_round_trip() {
        let id = PartyId::random();
        let s = id.to_uuid_string();
        assert_eq!(PartyId::from_uuid_str(&s), Some(id));
    }
}
