//! # liars-dice
//!
//! A rules engine for multiplayer Liar's Dice.
//!
//! Every player keeps a hand of dice hidden under a cup. Players take turns
//! raising a bid about how many dice across all hands show a face, until
//! someone calls Liar on the standing bid. The loser of the call gives up a
//! die, hands are re-rolled, and the game continues until one player has
//! dice left.
//!
//! ## Design Principles
//!
//! 1. **Transport-agnostic**: The engine exposes in-process operations only.
//!    Mapping chat commands or HTTP requests onto them is the caller's job.
//!
//! 2. **Injected randomness**: Dice are rolled from an [`IndexSource`]
//!    supplied at construction, so games can be replayed exactly.
//!
//! 3. **All-or-nothing operations**: A rejected action returns a
//!    [`GameError`] and leaves the session untouched. A forfeit that ends
//!    the game is applied and then reported as [`GameError::NoBidder`].
//!
//! ## Example
//!
//! ```
//! use liars_dice::{Game, Phase, Rules, ScriptedRng, Seat};
//!
//! // Everyone rolls ones, which are not wild here.
//! let mut game = Game::new(Rules::new(2), ScriptedRng::default());
//! game.add("ann").unwrap();
//! game.add("bo").unwrap();
//! game.start(Seat::new(0)).unwrap();
//!
//! game.bid("ann", 3, 0).unwrap(); // three ones
//! let result = game.liar("bo").unwrap();
//!
//! assert!(!result.lying); // four ones on the table
//! assert_eq!(game.player("bo").unwrap().dice, 1);
//! assert_eq!(game.phase(), Phase::RoundStart);
//! ```
//!
//! ## Modules
//!
//! - `core`: Dice, bids, players, actions, rules, randomness, errors
//! - `game`: The session state machine

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Bid, Face, FaceSet, GameError, GameRng, GameRngState, Hand,
    IndexSource, Player, PlayerId, Rules, RulesError, ScriptedRng, Seat,
};

pub use crate::game::{Game, LiarResult, Outcome, Phase};
