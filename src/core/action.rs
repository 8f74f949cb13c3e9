//! Player actions and action history.
//!
//! A turn offers three moves:
//! - raise the standing bid
//! - call Liar on it
//! - forfeit (leave the game, dropping all dice)
//!
//! `Action` carries raw bid values exactly as a caller received them; the
//! session validates them when the action is applied.

use serde::{Deserialize, Serialize};

use super::bid::Bid;
use super::player::PlayerId;

/// A move a player can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Claim at least `quantity` dice show `face` (slot index).
    Bid { quantity: u32, face: u32 },
    /// Challenge the standing bid.
    Liar,
    /// Drop out of the game.
    Forfeit,
}

impl Action {
    /// Build a bid action from an already validated bid.
    #[must_use]
    pub fn bid(bid: Bid) -> Self {
        Action::Bid {
            quantity: bid.quantity(),
            face: bid.face().index() as u32,
        }
    }
}

/// A successfully applied action with its position in the game.
///
/// Used for:
/// - Round history reporting
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken (first round is 1, 0 before
    /// the game starts).
    pub round: u32,

    /// Sequence number within the round (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
