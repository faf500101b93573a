//! In-Memory Vault
//!
//! Reference seal engine for tests and demos. Proofs are SHA256 digests over
//! a domain tag plus the payload; grants are plain sets. A production
//! deployment replaces this with the host platform's confidential engine
//! behind the same `SealEngine` trait.
//!
//! Uses BTreeMap for deterministic iteration order.

use std::collections::{BTreeMap, BTreeSet};
use sha2::{Sha256, Digest};

use crate::core::identity::PartyId;
use crate::game::state::Letter;
use crate::seal::engine::{SealEngine, SealError};
use crate::seal::handle::{Proof, SealedInput, SealedValue};

/// Domain separator for materialization proofs.
const SEAL_DOMAIN: &[u8] = b"SEALED_HANGMAN_SEAL_V1";

/// Compute the expected proof digest for a payload.
fn proof_digest(payload: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SEAL_DOMAIN);
    hasher.update(payload);
    hasher.finalize().into()
}

/// In-memory seal engine.
#[derive(Debug, Default)]
pub struct InMemoryVault {
    /// Next handle number (monotonic counter).
    next_handle: u64,

    /// Cleartext behind each issued handle.
    cleartext: BTreeMap<u64, Vec<u8>>,

    /// Decryption grants per handle.
    grants: BTreeMap<u64, BTreeSet<PartyId>>,
}

impl InMemoryVault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a valid `SealedInput` for a payload.
    ///
    /// Stands in for the external prover a real master would run.
    pub fn seal_input(payload: impl Into<Vec<u8>>) -> SealedInput {
        let payload = payload.into();
        let proof = Proof::new(proof_digest(&payload));
        SealedInput::new(payload, proof)
    }

    /// Decrypt a sealed value on behalf of a party.
    ///
    /// This is the out-of-band decryption channel: it succeeds only for
    /// parties holding a grant.
    pub fn open(&self, value: SealedValue, party: PartyId) -> Result<&[u8], SealError> {
        let granted = self
            .grants
            .get(&value.raw())
            .ok_or(SealError::UnknownValue)?;
        if !granted.contains(&party) {
            return Err(SealError::NoGrant);
        }
        self.cleartext
            .get(&value.raw())
            .map(|v| v.as_slice())
            .ok_or(SealError::UnknownValue)
    }

    /// Check whether a party holds a grant for a value.
    pub fn is_granted(&self, value: SealedValue, party: PartyId) -> bool {
        self.grants
            .get(&value.raw())
            .is_some_and(|g| g.contains(&party))
    }

    /// Number of values this vault has sealed.
    pub fn sealed_count(&self) -> usize {
        self.cleartext.len()
    }

    fn issue(&mut self, cleartext: Vec<u8>) -> SealedValue {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.cleartext.insert(handle, cleartext);
        self.grants.insert(handle, BTreeSet::new());
        SealedValue::from_raw(handle)
    }
}

impl SealEngine for InMemoryVault {
    fn materialize(&mut self, input: &SealedInput) -> Result<SealedValue, SealError> {
        if input.proof.0 != proof_digest(&input.payload) {
            return Err(SealError::ProofInvalid);
        }
        Ok(self.issue(input.payload.clone()))
    }

    fn seal_bool(&mut self, value: bool) -> SealedValue {
        self.issue(vec![value as u8])
    }

    fn seal_letter(&mut self, letter: Letter) -> SealedValue {
        self.issue(vec![letter.rank()])
    }

    fn grant(&mut self, value: SealedValue, party: PartyId) -> Result<(), SealError> {
        let granted = self
            .grants
            .get_mut(&value.raw())
            .ok_or(SealError::UnknownValue)?;
        granted.insert(party);
        Ok(())
    }
}
