//! Registry Errors
//!
//! Every rejected operation surfaces one of these to its caller and leaves
//! state untouched. Nothing is retried or swallowed.

use thiserror::Error;

use crate::game::state::GameId;
use crate::seal::engine::SealError;

/// Errors returned by registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Caller holds the wrong role for this operation.
    #[error("caller not authorized for this operation")]
    Unauthorized,

    /// No game with this id exists.
    #[error("no such game: {id}")]
    NoSuchGame {
        /// The requested game id.
        id: GameId,
    },

    /// Secret commit repeated on the same game.
    #[error("secret already committed")]
    AlreadyInitialized,

    /// Zero-length secret.
    #[error("secret word must not be empty")]
    EmptyInput,

    /// Gameplay attempted before the secret was committed.
    #[error("secret not yet committed")]
    NotInitialized,

    /// Mutation attempted after the terminal state.
    #[error("game already over")]
    GameOver,

    /// Life operation after lives were exhausted.
    #[error("no lives left")]
    NoLivesLeft,

    /// Guessed letter outside 1..=26.
    #[error("invalid letter rank: {letter}")]
    InvalidLetter {
        /// The rejected rank.
        letter: u8,
    },

    /// Reveal index beyond the secret's bounds.
    #[error("index {index} out of range for secret of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the committed secret.
        len: usize,
    },

    /// Seal engine rejected an operation (e.g. an invalid proof).
    #[error("seal engine error: {0}")]
    Seal(#[from] SealError),
}
