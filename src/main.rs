//! Sealed Hangman Demo
//!
//! Scripted end-to-end run of the coordinator against the in-memory vault:
//! one game lost to exhausted lives, one game won, snapshot dumped as JSON.

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sealed_hangman::{
    GameRegistry, InMemoryVault, Letter, PartyId, RegistryConfig, SealedInput, INITIAL_LIVES,
    VERSION,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Sealed Hangman v{}", VERSION);

    let master = PartyId::derive_from_subject("demo:master");
    let player = PartyId::derive_from_subject("demo:player");
    info!("Master: {}", master.short_hex());
    info!("Player: {}", player.short_hex());

    let mut registry = GameRegistry::new(RegistryConfig::new(master), InMemoryVault::new());

    // Game 0: the player runs out of lives
    let lost = registry.create_game(player);
    registry.commit_secret(master, lost, "Animals", &word_inputs("ZEBRA"))?;
    registry.submit_guess(player, lost, Letter::from_char('Q').unwrap().rank())?;
    for _ in 0..INITIAL_LIVES {
        registry.lose_life(master, lost)?;
    }

    // Game 1: the master reveals everything and declares the win
    let won = registry.create_game(player);
    registry.commit_secret(master, won, "Colors", &word_inputs("RED"))?;
    for (index, c) in "RED".chars().enumerate() {
        registry.submit_guess(player, won, Letter::from_char(c).unwrap().rank())?;
        registry.reveal_letter(master, won, index)?;
    }
    registry.declare_win(master, won)?;

    info!("=== Notifications ===");
    for event in registry.take_events() {
        info!("{:?}", event);
    }

    // The player can now open revealed positions through the vault
    let game = registry.game(won).expect("game exists");
    let first = registry
        .engine()
        .open(game.secret_letters[0], player)
        .expect("player was granted at commit time");
    info!(
        "Player decrypted position 0 of game {}: '{}'",
        won,
        Letter::from_rank(first[0]).expect("sealed letters are ranks").to_char()
    );

    info!("=== Persisted state ===");
    println!("{}", serde_json::to_string_pretty(&registry.snapshot())?);

    Ok(())
}

/// Build proven sealed inputs for a word, one per letter.
fn word_inputs(word: &str) -> Vec<SealedInput> {
    word.chars()
        .map(|c| {
            let rank = Letter::from_char(c).expect("demo words are ascii").rank();
            InMemoryVault::seal_input(vec![rank])
        })
        .collect()
}
