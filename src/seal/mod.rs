//! Confidentiality Layer
//!
//! Opaque sealed values and the engine contract behind them.
//!
//! - `handle`: `SealedValue` handles, proofs, external inputs
//! - `engine`: the `SealEngine` trait the registry consumes
//! - `vault`: in-memory reference engine for tests and demos

pub mod handle;
pub mod engine;
pub mod vault;

// Re-export key types
pub use handle::{Proof, SealedInput, SealedValue};
pub use engine::{SealEngine, SealError};
pub use vault::InMemoryVault;
