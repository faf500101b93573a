//! Game Events
//!
//! Notifications emitted by the registry, one per accepted state transition.
//! Append-only, ordered by operation acceptance order, and free of any
//! confidential payload: the guessed letter is public, the secret's
//! arrangement is not, and a reveal carries the position only.

use serde::{Serialize, Deserialize};

use crate::core::identity::PartyId;
use crate::game::state::{GameId, Letter};

/// A notification describing one accepted state transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A game was created.
    GameStarted {
        /// The new game.
        game_id: GameId,
        /// Party recorded as the game's player.
        player: PartyId,
    },

    /// The master committed the secret word.
    SecretWordSet {
        /// The game.
        game_id: GameId,
        /// Cleartext category label. Never the letters.
        category: String,
    },

    /// The player guessed a letter.
    GuessSubmitted {
        /// The game.
        game_id: GameId,
        /// The guessing player.
        player: PartyId,
        /// The guessed letter (letter identity is public).
        letter: Letter,
    },

    /// The master revealed one secret position.
    LetterRevealed {
        /// The game.
        game_id: GameId,
        /// Revealed position (the letter itself stays sealed).
        index: usize,
    },

    /// The player lost a life.
    LifeDecreased {
        /// The game.
        game_id: GameId,
        /// Lives remaining after the decrement.
        lives_left: u8,
    },

    /// The game reached a terminal state.
    GameOver {
        /// The game.
        game_id: GameId,
        /// Whether the player won.
        won: bool,
    },
}

impl GameEvent {
    /// The game this event belongs to.
    pub fn game_id(&self) -> GameId {
        match self {
            Self::GameStarted { game_id, .. }
            | Self::SecretWordSet { game_id, .. }
            | Self::GuessSubmitted { game_id, .. }
            | Self::LetterRevealed { game_id, .. }
            | Self::LifeDecreased { game_id, .. }
            | Self::GameOver { game_id, .. } => *game_id,
        }
    }

    /// Is this a terminal notification?
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}
