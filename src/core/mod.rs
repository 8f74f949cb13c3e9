//! Core types: dice, bids, players, actions, rules, randomness, errors.

pub mod action;
pub mod bid;
pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use bid::Bid;
pub use config::{Rules, RulesError, DEFAULT_DICE, MAX_DICE};
pub use dice::{Face, FaceSet, Hand, FACES};
pub use error::GameError;
pub use player::{Player, PlayerId, Seat};
pub use rng::{GameRng, GameRngState, IndexSource, ScriptedRng};
