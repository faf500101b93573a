//! Core primitives.
//!
//! - `identity`: 16-byte party identities with deterministic derivation

pub mod identity;

// Re-export core types
pub use identity::PartyId;
