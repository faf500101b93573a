//! Game State Definitions
//!
//! The per-game record and its supporting types. A game is a self-contained
//! finite-state machine: Created -> SecretCommitted -> (playing loop) ->
//! Finished. All mutation goes through the registry, which enforces the
//! role and phase preconditions.

use serde::{Serialize, Deserialize};

use crate::core::identity::PartyId;
use crate::seal::handle::SealedValue;
use crate::{ALPHABET_SIZE, INITIAL_LIVES};

/// Game identifier. Dense and ordered: 0, 1, 2, ...
pub type GameId = u64;

// =============================================================================
// LETTER
// =============================================================================

/// A letter of the alphabet, ranked 1..=26.
///
/// Rank 0 and ranks above 26 do not exist; construction enforces the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Letter(u8);

impl Letter {
    /// Create from a 1-based rank. Returns `None` outside 1..=26.
    pub fn from_rank(rank: u8) -> Option<Self> {
        if (1..=ALPHABET_SIZE as u8).contains(&rank) {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Create from an ASCII character, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self(c.to_ascii_uppercase() as u8 - b'A' + 1))
    }

    /// 1-based rank (1 = A, 26 = Z).
    #[inline]
    pub fn rank(self) -> u8 {
        self.0
    }

    /// 0-based index into per-letter slot arrays.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Uppercase ASCII character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0 - 1) as char
    }
}

// =============================================================================
// GAME PHASE
// =============================================================================

/// Lifecycle phase of a game, derived from its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, waiting for the master to commit a secret.
    Created,
    /// Secret committed; guess/reveal/lose-life may fire in any order.
    Playing,
    /// Terminal. No further gameplay mutation.
    Finished,
}

// =============================================================================
// GAME
// =============================================================================

/// Complete state of one game.
///
/// Sealed fields hold opaque handles only; the cleartext lives in the seal
/// engine and is reachable solely through grants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    /// Game identifier, assigned at creation, immutable.
    pub id: GameId,

    /// The one party allowed to submit guesses, recorded at creation.
    pub player: PartyId,

    /// Sealed secret word, one sealed letter per position. Set exactly once.
    pub secret_letters: Vec<SealedValue>,

    /// Sealed revelation flags, one per secret position. Sealed-false at
    /// commit time, independently flipped to sealed-true by the master.
    pub revealed_flags: Vec<SealedValue>,

    /// Per-letter guess slots, keyed by letter index. A slot is populated
    /// (and decryption-granted) only once that letter has been guessed.
    pub guessed_letters: [Option<SealedValue>; ALPHABET_SIZE],

    /// Remaining lives. Starts at `INITIAL_LIVES`, never increases, floor 0.
    pub lives: u8,

    /// Cleartext category label, set alongside the secret. Never confidential.
    pub category: String,

    /// Has the secret been committed? Gates all gameplay operations.
    pub secret_set: bool,

    /// Has the game reached a terminal state? Gates all further mutation.
    pub finished: bool,

    /// Did the player win? Meaningful only once `finished` is true.
    pub won: bool,
}

impl Game {
    /// Create a fresh game owned by `player`.
    pub fn new(id: GameId, player: PartyId) -> Self {
        Self {
            id,
            player,
            secret_letters: Vec::new(),
            revealed_flags: Vec::new(),
            guessed_letters: [None; ALPHABET_SIZE],
            lives: INITIAL_LIVES,
            category: String::new(),
            secret_set: false,
            finished: false,
            won: false,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        if self.finished {
            GamePhase::Finished
        } else if self.secret_set {
            GamePhase::Playing
        } else {
            GamePhase::Created
        }
    }

    /// Length of the committed secret (0 before commit).
    pub fn secret_len(&self) -> usize {
        self.secret_letters.len()
    }

    /// Has this letter been guessed yet?
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed_letters[letter.index()].is_some()
    }

    /// Letters guessed so far, in alphabet order.
    pub fn guessed(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed_letters
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| Letter(i as u8 + 1))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_range() {
        assert!(Letter::from_rank(0).is_none());
        assert!(Letter::from_rank(27).is_none());
        assert_eq!(Letter::from_rank(1).unwrap().to_char(), 'A');
        assert_eq!(Letter::from_rank(26).unwrap().to_char(), 'Z');
    }

    #[test]
    fn test_letter_from_char() {
        assert_eq!(Letter::from_char('a'), Letter::from_rank(1));
        assert_eq!(Letter::from_char('Z'), Letter::from_rank(26));
        assert_eq!(Letter::from_char('3'), None);
        assert_eq!(Letter::from_char(' '), None);
    }

    #[test]
    fn test_letter_index_round_trip() {
        for rank in 1..=26u8 {
            let letter = Letter::from_rank(rank).unwrap();
            assert_eq!(letter.index(), (rank - 1) as usize);
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
    }

    #[test]
    fn test_new_game_defaults() {
        let player = PartyId::derive_from_subject("player");
        let game = Game::new(0, player);

        assert_eq!(game.phase(), GamePhase::Created);
        assert_eq!(game.lives, INITIAL_LIVES);
        assert_eq!(game.secret_len(), 0);
        assert!(!game.secret_set);
        assert!(!game.finished);
        assert!(game.guessed().next().is_none());
    }

    #[test]
    fn test_phase_follows_flags() {
        let player = PartyId::derive_from_subject("player");
        let mut game = Game::new(3, player);

        game.secret_set = true;
        assert_eq!(game.phase(), GamePhase::Playing);

        game.finished = true;
        assert_eq!(game.phase(), GamePhase::Finished);
    }
}
