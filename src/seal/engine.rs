//! Seal Engine Contract
//!
//! The seam between the game registry and whatever confidential-computation
//! engine backs it. The registry only ever needs four capabilities:
//! materialize a proven external value, seal a literal, and grant a party
//! decryption rights. Decryption itself happens outside the registry,
//! through channels the engine controls.

use thiserror::Error;

use crate::core::identity::PartyId;
use crate::game::state::Letter;
use crate::seal::handle::{SealedInput, SealedValue};

/// Errors raised by a seal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SealError {
    /// Proof did not verify against the payload.
    #[error("materialization proof invalid")]
    ProofInvalid,

    /// Handle was never issued by this engine.
    #[error("unknown sealed value")]
    UnknownValue,

    /// Party holds no grant for the value.
    #[error("no decryption grant")]
    NoGrant,
}

/// Confidentiality collaborator consumed by the registry.
///
/// Implementations must keep grants additive: a grant, once made, is never
/// revoked, and repeating it is a no-op.
pub trait SealEngine {
    /// Seal an externally represented value after checking its proof.
    ///
    /// A failed proof must leave the engine unchanged.
    fn materialize(&mut self, input: &SealedInput) -> Result<SealedValue, SealError>;

    /// Seal a literal boolean.
    fn seal_bool(&mut self, value: bool) -> SealedValue;

    /// Seal a literal letter.
    fn seal_letter(&mut self, letter: Letter) -> SealedValue;

    /// Grant `party` decryption rights over `value`. Idempotent.
    fn grant(&mut self, value: SealedValue, party: PartyId) -> Result<(), SealError>;
}
