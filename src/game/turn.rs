//! Turn order.

use super::Game;
use crate::core::{GameError, Seat};

impl Game {
    /// Next seat after `from` that still holds dice, wrapping around the
    /// table.
    ///
    /// `from` itself is never returned, even if it has dice. Fails with
    /// [`GameError::NoBidder`] when no other seat has dice, which means the
    /// game is over.
    pub fn next_bidder(&self, from: Seat) -> Result<Seat, GameError> {
        let seats = self.seats.len();
        let mut seat = from;
        for _ in 1..seats {
            seat = seat.next(seats);
            if self.seats[seat.index()].dice > 0 {
                return Ok(seat);
            }
        }
        Err(GameError::NoBidder)
    }
}
