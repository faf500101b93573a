//! Game Logic Module
//!
//! The registry and per-game state machine.
//!
//! ## Module Structure
//!
//! - `state`: the per-game record, letters, phases
//! - `registry`: the six operations and their precondition discipline
//! - `events`: notifications emitted on accepted transitions
//! - `error`: the failure taxonomy

pub mod state;
pub mod registry;
pub mod events;
pub mod error;

// Re-export key types
pub use state::{Game, GameId, GamePhase, Letter};
pub use registry::{GameRegistry, RegistryConfig, RegistrySnapshot};
pub use events::GameEvent;
pub use error::GameError;
