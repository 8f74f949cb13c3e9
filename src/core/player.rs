//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque string identity supplied by the caller (a chat user id, a
//! username). The engine only compares ids for equality.
//!
//! ## Seat
//!
//! 0-based position in the seating order. Seats are assigned in the order
//! players join and never change.
//!
//! ## Player
//!
//! A read-only snapshot of one player: id, remaining dice, and hand.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use super::dice::Hand;

/// Opaque player identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position in the seating order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(pub usize);

impl Seat {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The seat after this one at a table of `seats`, wrapping around.
    #[must_use]
    pub const fn next(self, seats: usize) -> Self {
        Self((self.0 + 1) % seats)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Snapshot of a player.
///
/// `hand` is only meaningful while `dice > 0`; eliminated players hold an
/// empty hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub seat: Seat,
    pub dice: u32,
    pub hand: Hand,
}

impl Player {
    /// Check whether the player still holds dice.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.dice > 0
    }
}
