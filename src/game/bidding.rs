//! Bid validation and turn advancement.

use tracing::debug;

use super::{Game, Phase};
use crate::core::bid::checked_encode;
use crate::core::{Action, Bid, GameError, FACES};

impl Game {
    /// Raise the standing bid on behalf of `id`.
    ///
    /// `face` is a face slot index in `0..=6`. Slot 6 is encoded as-is, so
    /// `(q, 6)` stands for the same bid as `(q + 1, 0)`. The bid must come
    /// from the player whose turn it is, claim no more dice than are in play,
    /// and be strictly higher than the standing bid. On success the turn
    /// passes to the next player with dice and the new standing bid is
    /// returned.
    pub fn bid(&mut self, id: &str, quantity: u32, face: u32) -> Result<Bid, GameError> {
        let seat = self.require_turn(id)?;

        if face > FACES as u32 {
            return Err(GameError::InvalidFace(face));
        }

        let dice = self.total_dice();
        if quantity > dice {
            return Err(GameError::InvalidQuantity { quantity, dice });
        }

        let bid = checked_encode(quantity, face)
            .map(Bid::from_encoded)
            .ok_or(GameError::InvalidQuantity { quantity, dice })?;
        if bid <= self.bid {
            return Err(GameError::BidTooLow {
                quantity: self.bid.quantity(),
                face: self.bid.face().index() as u32,
            });
        }

        let next = self.next_bidder(seat)?;

        self.record(seat, Action::bid(bid));
        self.prev = Some(seat);
        self.bid = bid;
        self.bidder = next;
        self.phase = Phase::Bidding;

        debug!(
            player = id,
            bid = %bid,
            next = %self.seats[next.index()].id,
            "bid accepted"
        );
        Ok(bid)
    }
}
