//! A single Liar's Dice session, from seating to the last player standing.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending ──start──▶ RoundStart ──bid──▶ Bidding ──liar──▶ LiarCalled
//!                        ▲                  │ bid             │
//!                        └──────────────────┼─────── re-deal ─┤
//!                                           ▼                 ▼
//!                                        Bidding             Over
//! ```
//!
//! - `Pending`: roster being assembled, no hands dealt.
//! - `RoundStart`: hands dealt, no bid yet.
//! - `Bidding`: at least one bid this round.
//! - `LiarCalled`: a challenge is being resolved. Never observed between
//!   operations; resolution always ends in a fresh round or `Over`.
//! - `Over`: at most one player holds dice.
//!
//! ## Operations
//!
//! Roster ([`Game::add`], [`Game::forfeit`]), round start ([`Game::start`]),
//! turn order ([`Game::next_bidder`]), bidding ([`Game::bid`]) and
//! challenges ([`Game::liar`]) live in their own submodules. Every operation
//! either applies completely or returns an error without touching state. The
//! one exception is a forfeit that ends the game: it is applied and then
//! reported as [`GameError::NoBidder`].
//!
//! ## Concurrency
//!
//! `Game` is `Send` but not internally synchronized. A service sharing one
//! session between request handlers holds a mutex for the duration of each
//! operation.

mod bidding;
mod liar;
mod roster;
mod round;
mod turn;

#[cfg(test)]
mod test_helpers;

pub use liar::LiarResult;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    Action, ActionRecord, Bid, FaceSet, GameError, GameRng, Hand, IndexSource, PlayerId, Rules,
    Seat, MAX_DICE,
};

/// Session lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Pending,
    RoundStart,
    Bidding,
    LiarCalled,
    Over,
}

impl Phase {
    /// True while rounds are being played.
    #[must_use]
    pub fn in_play(self) -> bool {
        matches!(self, Phase::RoundStart | Phase::Bidding | Phase::LiarCalled)
    }
}

/// Result of a successfully applied [`Action`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The bid now standing.
    Bid(Bid),
    /// How the challenge resolved.
    Liar(LiarResult),
    /// The player left the game.
    Forfeit,
}

/// Per-seat state.
#[derive(Clone, Debug)]
struct Seated {
    id: PlayerId,
    dice: u32,
    hand: Hand,
}

/// A Liar's Dice session.
pub struct Game {
    rules: Rules,

    /// Players in seating order.
    seats: Vec<Seated>,

    /// Seat lookup by id.
    index: FxHashMap<PlayerId, Seat>,

    phase: Phase,

    /// Whose turn it is to bid or call.
    bidder: Seat,

    /// Who made the standing bid. `None` until the first bid of a round.
    prev: Option<Seat>,

    /// Standing bid, `Bid::NONE` at the start of every round.
    bid: Bid,

    /// Round number (starts at 1 once dealt).
    round: u32,

    /// Action sequence within the round.
    sequence: u32,

    history: Vec<ActionRecord>,

    rng: Box<dyn IndexSource + Send>,
}

impl Game {
    /// Create a pending session with the given rules and dice source.
    #[must_use]
    pub fn new(rules: Rules, rng: impl IndexSource + Send + 'static) -> Self {
        assert!(rules.dice > 0, "Players must start with at least 1 die");
        assert!(rules.dice <= MAX_DICE, "Players may start with at most {MAX_DICE} dice");

        Self {
            rules,
            seats: Vec::new(),
            index: FxHashMap::default(),
            phase: Phase::Pending,
            bidder: Seat::new(0),
            prev: None,
            bid: Bid::NONE,
            round: 0,
            sequence: 0,
            history: Vec::new(),
            rng: Box::new(rng),
        }
    }

    /// Create a pending session rolling dice with a seeded [`GameRng`].
    #[must_use]
    pub fn with_seed(rules: Rules, seed: u64) -> Self {
        Self::new(rules, GameRng::new(seed))
    }

    /// Rules of this session.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number (0 before the first deal).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The standing bid.
    #[must_use]
    pub fn current_bid(&self) -> Bid {
        self.bid
    }

    /// Player whose turn it is, while rounds are being played.
    #[must_use]
    pub fn bidder(&self) -> Option<&PlayerId> {
        self.phase
            .in_play()
            .then(|| &self.seats[self.bidder.index()].id)
    }

    /// Player who made the standing bid.
    #[must_use]
    pub fn previous_bidder(&self) -> Option<&PlayerId> {
        self.prev.map(|seat| &self.seats[seat.index()].id)
    }

    /// The last player holding dice, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        if self.phase != Phase::Over {
            return None;
        }
        self.seats.iter().find(|s| s.dice > 0).map(|s| &s.id)
    }

    /// Number of dice showing any face in `faces`, across every hand.
    #[must_use]
    pub fn count(&self, faces: FaceSet) -> u32 {
        self.seats
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.hand.count_any(faces)))
    }

    /// Every action applied so far.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Actions applied in the current round.
    pub fn round_history(&self) -> impl Iterator<Item = &ActionRecord> {
        let round = self.round;
        self.history.iter().filter(move |r| r.round == round)
    }

    /// Apply an action on behalf of `id`.
    ///
    /// Dispatches to [`Game::bid`], [`Game::liar`] or [`Game::forfeit`].
    pub fn apply(&mut self, id: &str, action: Action) -> Result<Outcome, GameError> {
        match action {
            Action::Bid { quantity, face } => self.bid(id, quantity, face).map(Outcome::Bid),
            Action::Liar => self.liar(id).map(Outcome::Liar),
            Action::Forfeit => self.forfeit(id).map(|()| Outcome::Forfeit),
        }
    }

    /// Resolve `id` to the seat whose turn it is, or explain why not.
    fn require_turn(&self, id: &str) -> Result<Seat, GameError> {
        let seat = self.seat_of(id)?;
        match self.phase {
            Phase::Pending => return Err(GameError::NotStarted),
            Phase::Over => return Err(GameError::NoBidder),
            _ => {}
        }
        if seat != self.bidder {
            return Err(GameError::OutOfTurn {
                player: self.seats[seat.index()].id.clone(),
                bidder: self.seats[self.bidder.index()].id.clone(),
            });
        }
        Ok(seat)
    }

    fn record(&mut self, seat: Seat, action: Action) {
        let player = self.seats[seat.index()].id.clone();
        self.history
            .push(ActionRecord::new(player, action, self.round, self.sequence));
        self.sequence += 1;
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("rules", &self.rules)
            .field("seats", &self.seats)
            .field("phase", &self.phase)
            .field("bidder", &self.bidder)
            .field("prev", &self.prev)
            .field("bid", &self.bid)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}
