//! Game Registry
//!
//! Owns the collection of independent games and enforces the role and phase
//! preconditions on every operation. Each operation either mutates exactly
//! one game and emits a notification, or fails with zero state change.
//!
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::core::identity::PartyId;
use crate::game::error::GameError;
use crate::game::events::GameEvent;
use crate::game::state::{Game, GameId, Letter};
use crate::seal::engine::SealEngine;
use crate::seal::handle::SealedInput;

/// Registry configuration, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// The single identity allowed to commit secrets and adjudicate outcomes.
    pub master: PartyId,

    /// The registry's own party, used for self-grants over sealed state.
    pub identity: PartyId,
}

impl RegistryConfig {
    /// Create a config for `master`, with a derived registry identity.
    pub fn new(master: PartyId) -> Self {
        Self {
            master,
            identity: PartyId::derive_from_subject("sealed-hangman:registry"),
        }
    }

    /// Override the registry's own identity.
    pub fn with_identity(mut self, identity: PartyId) -> Self {
        self.identity = identity;
        self
    }
}

/// Serializable registry state: the persisted layout.
///
/// Games map, next-id counter, and the fixed master identity. The seal
/// engine persists separately, on its own side of the trust boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Fixed master identity.
    pub master: PartyId,

    /// Next game id to allocate.
    pub next_id: GameId,

    /// All games, finished ones included.
    pub games: BTreeMap<GameId, Game>,
}

/// Authoritative game registry and state machine.
///
/// Generic over the seal engine so tests run against
/// [`crate::seal::InMemoryVault`] and deployments plug in the host
/// platform's confidential engine.
pub struct GameRegistry<E> {
    /// Fixed role configuration.
    config: RegistryConfig,

    /// Confidentiality collaborator.
    engine: E,

    /// All games (BTreeMap for deterministic iteration).
    games: BTreeMap<GameId, Game>,

    /// Next game id (monotonic counter).
    next_id: GameId,

    /// Notifications in acceptance order, drained by `take_events`.
    pending_events: Vec<GameEvent>,
}

impl<E: SealEngine> GameRegistry<E> {
    /// Create a registry with `master` as the fixed adjudicating identity.
    pub fn new(config: RegistryConfig, engine: E) -> Self {
        Self {
            config,
            engine,
            games: BTreeMap::new(),
            next_id: 0,
            pending_events: Vec::new(),
        }
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Create a new game owned by `caller`.
    ///
    /// Allocates the next id and records `caller` as the game's player.
    /// Never fails.
    pub fn create_game(&mut self, caller: PartyId) -> GameId {
        let id = self.next_id;
        self.next_id += 1;
        self.games.insert(id, Game::new(id, caller));

        info!("Game {} created for player {}", id, caller.short_hex());
        self.pending_events.push(GameEvent::GameStarted {
            game_id: id,
            player: caller,
        });
        id
    }

    /// Commit the secret word for a game. Master only, exactly once.
    ///
    /// Each input is materialized through the seal engine; an invalid proof
    /// aborts the whole commit with the game unchanged. On success the
    /// registry and the game's player are granted decryption rights over
    /// every sealed letter and every revealed flag. Holding a grant is not
    /// the same as being entitled to use it: display-time filtering by the
    /// revealed flag happens outside this core.
    pub fn commit_secret(
        &mut self,
        caller: PartyId,
        game_id: GameId,
        category: &str,
        letters: &[SealedInput],
    ) -> Result<(), GameError> {
        if caller != self.config.master {
            return Err(GameError::Unauthorized);
        }
        let player = {
            let game = self.games.get(&game_id).ok_or(GameError::NoSuchGame { id: game_id })?;
            if game.secret_set {
                return Err(GameError::AlreadyInitialized);
            }
            game.player
        };
        if letters.is_empty() {
            return Err(GameError::EmptyInput);
        }

        // Materialize everything before touching the game; a failed proof
        // must not leave a partial commitment.
        let mut secret_letters = Vec::with_capacity(letters.len());
        for input in letters {
            secret_letters.push(self.engine.materialize(input)?);
        }
        let mut revealed_flags = Vec::with_capacity(letters.len());
        for _ in letters {
            revealed_flags.push(self.engine.seal_bool(false));
        }

        for value in secret_letters.iter().chain(revealed_flags.iter()) {
            self.engine.grant(*value, self.config.identity)?;
            self.engine.grant(*value, player)?;
        }

        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::NoSuchGame { id: game_id })?;
        game.secret_letters = secret_letters;
        game.revealed_flags = revealed_flags;
        game.category = category.to_string();
        game.secret_set = true;

        info!(
            "Game {}: secret committed, {} letters, category \"{}\"",
            game_id,
            game.secret_len(),
            category
        );
        self.pending_events.push(GameEvent::SecretWordSet {
            game_id,
            category: category.to_string(),
        });
        Ok(())
    }

    /// Submit a letter guess. Player only.
    ///
    /// Populates the per-letter slot (sealing the guessed letter) and grants
    /// the player and the registry decryption rights over it. Does not judge
    /// correctness: the master observes the guess and answers with
    /// `reveal_letter` or `lose_life`.
    pub fn submit_guess(
        &mut self,
        caller: PartyId,
        game_id: GameId,
        letter: u8,
    ) -> Result<(), GameError> {
        let game = self.games.get(&game_id).ok_or(GameError::NoSuchGame { id: game_id })?;
        if caller != game.player {
            return Err(GameError::Unauthorized);
        }
        if !game.secret_set {
            return Err(GameError::NotInitialized);
        }
        if game.finished {
            return Err(GameError::GameOver);
        }
        if game.lives == 0 {
            return Err(GameError::NoLivesLeft);
        }
        let letter = Letter::from_rank(letter).ok_or(GameError::InvalidLetter { letter })?;

        // Repeated guesses reuse the existing slot; grants are idempotent.
        // Seal and grant before writing the slot, so a failed grant leaves
        // the game untouched.
        let slot = game.guessed_letters[letter.index()];
        let sealed = slot.unwrap_or_else(|| self.engine.seal_letter(letter));
        self.engine.grant(sealed, self.config.identity)?;
        self.engine.grant(sealed, caller)?;

        if slot.is_none() {
            let game = self
                .games
                .get_mut(&game_id)
                .ok_or(GameError::NoSuchGame { id: game_id })?;
            game.guessed_letters[letter.index()] = Some(sealed);
        }

        debug!(
            "Game {}: player {} guessed '{}'",
            game_id,
            caller.short_hex(),
            letter.to_char()
        );
        self.pending_events.push(GameEvent::GuessSubmitted {
            game_id,
            player: caller,
            letter,
        });
        Ok(())
    }

    /// Mark one secret position as revealed. Master only.
    ///
    /// Flips the position's flag to sealed-true. The player was pre-granted
    /// over every position at commit time; this flag is what makes using
    /// that grant legitimate. The position index is public, the letter is
    /// not.
    pub fn reveal_letter(
        &mut self,
        caller: PartyId,
        game_id: GameId,
        index: usize,
    ) -> Result<(), GameError> {
        if caller != self.config.master {
            return Err(GameError::Unauthorized);
        }
        let player = {
            let game = self.games.get(&game_id).ok_or(GameError::NoSuchGame { id: game_id })?;
            if game.finished {
                return Err(GameError::GameOver);
            }
            if index >= game.revealed_flags.len() {
                return Err(GameError::IndexOutOfRange {
                    index,
                    len: game.revealed_flags.len(),
                });
            }
            game.player
        };

        let flag = self.engine.seal_bool(true);
        self.engine.grant(flag, self.config.identity)?;
        self.engine.grant(flag, player)?;

        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::NoSuchGame { id: game_id })?;
        game.revealed_flags[index] = flag;

        debug!("Game {}: position {} revealed", game_id, index);
        self.pending_events.push(GameEvent::LetterRevealed { game_id, index });
        Ok(())
    }

    /// Take one life from the player. Master only.
    ///
    /// Reaching zero lives terminates the game as a loss within the same
    /// call: the `LifeDecreased` and `GameOver` notifications are emitted
    /// together.
    pub fn lose_life(&mut self, caller: PartyId, game_id: GameId) -> Result<(), GameError> {
        if caller != self.config.master {
            return Err(GameError::Unauthorized);
        }
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::NoSuchGame { id: game_id })?;
        if game.finished {
            return Err(GameError::GameOver);
        }
        if game.lives == 0 {
            return Err(GameError::NoLivesLeft);
        }

        game.lives -= 1;
        let lives_left = game.lives;
        debug!("Game {}: life lost, {} remaining", game_id, lives_left);
        self.pending_events.push(GameEvent::LifeDecreased { game_id, lives_left });

        if lives_left == 0 {
            game.finished = true;
            game.won = false;
            info!("Game {}: over, player lost", game_id);
            self.pending_events.push(GameEvent::GameOver { game_id, won: false });
        }
        Ok(())
    }

    /// Declare the game won. Master only.
    ///
    /// The only path to a winning terminal state. The registry does not
    /// verify that every position was revealed; that judgment rests with
    /// the master's off-core verifier.
    pub fn declare_win(&mut self, caller: PartyId, game_id: GameId) -> Result<(), GameError> {
        if caller != self.config.master {
            return Err(GameError::Unauthorized);
        }
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::NoSuchGame { id: game_id })?;
        if game.finished {
            return Err(GameError::GameOver);
        }

        game.finished = true;
        game.won = true;
        info!("Game {}: over, player won", game_id);
        self.pending_events.push(GameEvent::GameOver { game_id, won: true });
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Look up a game. Finished games remain queryable indefinitely.
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Number of games ever created.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// The fixed master identity.
    pub fn master(&self) -> PartyId {
        self.config.master
    }

    /// The registry's own party identity.
    pub fn identity(&self) -> PartyId {
        self.config.identity
    }

    /// Borrow the seal engine (for out-of-core decryption in tests/demos).
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Pending notifications, in acceptance order.
    pub fn events(&self) -> &[GameEvent] {
        &self.pending_events
    }

    /// Take pending notifications (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Snapshot of the persisted state layout.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            master: self.config.master,
            next_id: self.next_id,
            games: self.games.clone(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
