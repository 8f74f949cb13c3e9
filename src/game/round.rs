//! Dealing rounds.
//!
//! A deal re-rolls every hand that still has dice, clears the standing bid
//! and hands the lead to the starting bidder. The first deal comes from
//! [`Game::start`]; every later one follows a challenge or a forfeit.

use tracing::info;

use super::{Game, Phase};
use crate::core::{Bid, GameError, Hand, Seat};

impl Game {
    /// Deal the first round with `seat` leading.
    ///
    /// If the player at `seat` already forfeited, the next player with dice
    /// leads instead.
    pub fn start(&mut self, seat: Seat) -> Result<(), GameError> {
        match self.phase {
            Phase::Pending => {}
            Phase::Over => return Err(GameError::NoBidder),
            _ => return Err(GameError::AlreadyStarted),
        }
        if self.players_with_dice() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        if seat.index() >= self.seats.len() {
            return Err(GameError::NoSuchSeat(seat.index()));
        }

        let leader = self.first_with_dice(seat)?;
        self.deal(leader);
        Ok(())
    }

    /// Continue after a die was lost: end the game if at most one player
    /// still has dice, otherwise deal a round led from `seat`.
    pub(super) fn next_round_from(&mut self, seat: Seat) -> Result<(), GameError> {
        if self.players_with_dice() <= 1 {
            self.finish();
            return Ok(());
        }
        let leader = self.first_with_dice(seat)?;
        self.deal(leader);
        Ok(())
    }

    /// `seat` if it still holds dice, else the next seat that does.
    fn first_with_dice(&self, seat: Seat) -> Result<Seat, GameError> {
        if self.seats[seat.index()].dice > 0 {
            Ok(seat)
        } else {
            self.next_bidder(seat)
        }
    }

    pub(super) fn deal(&mut self, leader: Seat) {
        let rng = &mut *self.rng;
        for seated in &mut self.seats {
            seated.hand = Hand::roll(seated.dice, rng);
        }

        self.bid = Bid::NONE;
        self.prev = None;
        self.bidder = leader;
        self.round += 1;
        self.sequence = 0;
        self.phase = Phase::RoundStart;

        info!(
            round = self.round,
            leader = %self.seats[leader.index()].id,
            dice = self.total_dice(),
            "round dealt"
        );
    }

    pub(super) fn finish(&mut self) {
        self.bid = Bid::NONE;
        self.prev = None;
        self.phase = Phase::Over;
        if let Some(seat) = self.seats.iter().position(|s| s.dice > 0) {
            self.bidder = Seat::new(seat);
        }

        info!(
            winner = self.winner().map(|id| id.as_str()).unwrap_or("nobody"),
            rounds = self.round,
            "game over"
        );
    }
}
