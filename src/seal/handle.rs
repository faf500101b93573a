//! Sealed Value Handles
//!
//! Opaque handles to confidential values held by a seal engine. The handle
//! carries no payload; only the engine that issued it can relate it back to
//! cleartext, and only for parties holding a grant.

use serde::{Serialize, Deserialize};

/// Opaque handle to a sealed (confidential) value.
///
/// Comparable only for identity. Two handles are equal iff they refer to the
/// same engine-held value; nothing about the underlying cleartext leaks
/// through this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SealedValue(u64);

impl SealedValue {
    /// Construct from a raw engine-issued handle number.
    ///
    /// Only seal engines should mint these.
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw handle number, for engine-side bookkeeping.
    pub(crate) const fn raw(self) -> u64 {
        self.0
    }
}

/// Correctness proof accompanying an external representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof(pub [u8; 32]);

impl Proof {
    /// Construct from raw digest bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// External representation of a confidential value plus its proof.
///
/// This is what a master submits when committing a secret: the engine checks
/// the proof against the payload before sealing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedInput {
    /// Externally produced representation of the value.
    pub payload: Vec<u8>,

    /// Proof that the payload is well-formed.
    pub proof: Proof,
}

impl SealedInput {
    /// Create a new input pair.
    pub fn new(payload: Vec<u8>, proof: Proof) -> Self {
        Self { payload, proof }
    }
}
