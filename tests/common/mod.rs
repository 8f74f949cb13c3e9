//! Shared helpers for integration tests.

#![allow(dead_code)]

use liars_dice::{Game, Rules, ScriptedRng, Seat};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once per test binary.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Seat `ids` in order and deal from the scripted faces, seat 0 leading.
pub fn scripted_game(ids: &[&str], rules: Rules, rolls: &[usize]) -> Game {
    init_logging();

    let mut game = Game::new(rules, ScriptedRng::new(rolls.iter().copied()));
    for id in ids {
        game.add(*id).expect("unique ids");
    }
    game.start(Seat::new(0)).expect("enough players");
    game
}

/// Seat `ids` in order and deal from a seeded RNG, seat 0 leading.
pub fn seeded_game(ids: &[&str], rules: Rules, seed: u64) -> Game {
    init_logging();

    let mut game = Game::with_seed(rules, seed);
    for id in ids {
        game.add(*id).expect("unique ids");
    }
    game.start(Seat::new(0)).expect("enough players");
    game
}
