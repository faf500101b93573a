//! # Sealed Hangman
//!
//! Authoritative coordinator for a confidential letter-guessing game.
//!
//! Two asymmetric roles share each game: a **master** who knows the secret
//! word and a **player** who guesses letters without ever being able to read
//! the secret directly. The registry owns the per-game state machine and the
//! confidentiality contract; the engine that actually seals, compares, and
//! decrypts values sits behind the [`seal::SealEngine`] trait.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SEALED HANGMAN                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/             - Primitives                              │
//! │  └── identity.rs   - 16-byte party identities                │
//! │                                                              │
//! │  seal/             - Confidentiality boundary                │
//! │  ├── handle.rs     - Opaque sealed-value handles, proofs     │
//! │  ├── engine.rs     - SealEngine trait (collaborator seam)    │
//! │  └── vault.rs      - In-memory engine for tests/demos        │
//! │                                                              │
//! │  game/             - Registry & state machine                │
//! │  ├── state.rs      - Game record, letters, phases            │
//! │  ├── registry.rs   - The six operations                      │
//! │  ├── events.rs     - Transition notifications                │
//! │  └── error.rs      - Failure taxonomy                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Confidentiality Guarantee
//!
//! The state machine only ever touches opaque [`seal::SealedValue`] handles:
//! - Secret letters are materialized from proven external inputs
//! - Revealed flags are sealed booleans, flipped only by the master
//! - Decryption rights are granted at commit time; a grant becomes usable
//!   only once the matching position is revealed
//! - Notifications never carry confidential payloads
//!
//! Every operation either completes fully or aborts atomically on a
//! precondition failure; partial state is never observable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod seal;

// Re-export commonly used types
pub use crate::core::identity::PartyId;
pub use game::error::GameError;
pub use game::events::GameEvent;
pub use game::registry::{GameRegistry, RegistryConfig, RegistrySnapshot};
pub use game::state::{Game, GameId, GamePhase, Letter};
pub use seal::{InMemoryVault, Proof, SealEngine, SealError, SealedInput, SealedValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lives a player starts each game with.
pub const INITIAL_LIVES: u8 = 6;

/// Number of per-letter guess slots.
pub const ALPHABET_SIZE: usize = 26;
