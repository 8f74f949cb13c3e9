//! Builders for sessions in known states.

use super::{Game, Phase};
use crate::core::{Bid, Hand, Rules, ScriptedRng, Seat, FACES};

/// A pending game with `ids` seated in order, rolling the scripted faces.
pub(crate) fn pending(
    ids: &[&str],
    rules: Rules,
    rolls: impl IntoIterator<Item = usize>,
) -> Game {
    let mut game = Game::new(rules, ScriptedRng::new(rolls));
    for id in ids {
        game.add(*id).unwrap();
    }
    game
}

/// A game dealt from the scripted faces with seat 0 to bid first.
///
/// Faces are consumed seat by seat, `rules.dice` per player.
pub(crate) fn started(
    ids: &[&str],
    rules: Rules,
    rolls: impl IntoIterator<Item = usize>,
) -> Game {
    let mut game = pending(ids, rules, rolls);
    game.start(Seat::new(0)).unwrap();
    game
}

/// A game at round start with explicit hands; each player's dice count is
/// the size of their hand.
pub(crate) fn seated(ids: &[&str], rules: Rules, hands: &[[u32; FACES]]) -> Game {
    assert_eq!(ids.len(), hands.len(), "One hand per player");

    let mut game = pending(ids, rules, std::iter::empty());
    for (seated, counts) in game.seats.iter_mut().zip(hands) {
        seated.hand = Hand::from_counts(*counts);
        seated.dice = seated.hand.total();
    }
    game.phase = Phase::RoundStart;
    game.round = 1;
    game.bidder = Seat::new(0);
    game.prev = None;
    game.bid = Bid::NONE;
    game
}

impl Game {
    /// Overwrite a seat's dice count, emptying the hand when it drops to 0.
    pub(crate) fn set_dice(&mut self, seat: usize, dice: u32) {
        self.seats[seat].dice = dice;
        if dice == 0 {
            self.seats[seat].hand = Hand::EMPTY;
        }
    }

    /// Force the turn to `seat` with `bid` standing from `prev`.
    pub(crate) fn set_turn(&mut self, seat: usize, prev: Option<usize>, bid: Bid) {
        self.bidder = Seat::new(seat);
        self.prev = prev.map(Seat::new);
        self.bid = bid;
        self.phase = if bid.is_none() {
            Phase::RoundStart
        } else {
            Phase::Bidding
        };
    }
}
