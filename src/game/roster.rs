//! Seating, membership, and forfeits.

use tracing::info;

use super::{Game, Phase, Seated};
use crate::core::{Action, GameError, Hand, Player, PlayerId, Seat};

impl Game {
    /// Seat a new player at the end of the table with the starting dice.
    ///
    /// Players can only join before the first round is dealt.
    pub fn add(&mut self, id: impl Into<PlayerId>) -> Result<Seat, GameError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(GameError::AlreadyExists(id));
        }
        if self.phase != Phase::Pending {
            return Err(GameError::AlreadyStarted);
        }

        let seat = Seat::new(self.seats.len());
        info!(player = %id, seat = seat.index(), "player joined");
        self.index.insert(id.clone(), seat);
        self.seats.push(Seated {
            id,
            dice: self.rules.dice,
            hand: Hand::EMPTY,
        });
        Ok(seat)
    }

    /// Check whether `id` is seated.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Seat of `id`.
    pub fn seat_of(&self, id: &str) -> Result<Seat, GameError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GameError::NotExist(PlayerId::from(id)))
    }

    /// Snapshot of `id`'s dice and hand.
    pub fn player(&self, id: &str) -> Result<Player, GameError> {
        let seat = self.seat_of(id)?;
        Ok(self.snapshot(seat))
    }

    /// Snapshots of every player in seating order.
    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        (0..self.seats.len()).map(|i| self.snapshot(Seat::new(i))).collect()
    }

    /// Number of seated players, eliminated or not.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Number of players still holding dice.
    #[must_use]
    pub fn players_with_dice(&self) -> usize {
        self.seats.iter().filter(|s| s.dice > 0).count()
    }

    /// Dice left in the game across all players, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.seats
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.dice))
    }

    /// Drop all of `id`'s dice.
    ///
    /// Before the first deal this only takes the player out of the game.
    /// During play a fresh round is dealt, led by the next player with dice
    /// after the current bidder. If only one player is left holding dice the
    /// game ends and the forfeit is still applied, but the call returns
    /// [`GameError::NoBidder`] so the caller learns the game is over.
    pub fn forfeit(&mut self, id: &str) -> Result<(), GameError> {
        let seat = self.seat_of(id)?;
        if self.seats[seat.index()].dice == 0 {
            return Err(GameError::AlreadyLost(PlayerId::from(id)));
        }

        match self.phase {
            Phase::Pending => {
                self.record(seat, Action::Forfeit);
                self.eliminate(seat);
                info!(player = id, "player left before the game started");
                return Ok(());
            }
            // Only the winner still has dice, and there is nobody to hand the game to.
            Phase::Over => return Err(GameError::NoBidder),
            _ => {}
        }

        self.record(seat, Action::Forfeit);
        self.eliminate(seat);
        info!(player = id, round = self.round, "player forfeited");

        if self.players_with_dice() <= 1 {
            self.finish();
            return Err(GameError::NoBidder);
        }
        let leader = self.next_bidder(self.bidder)?;
        self.deal(leader);
        Ok(())
    }

    /// Take one die from `seat`.
    pub(super) fn remove_die(&mut self, seat: Seat) {
        let seated = &mut self.seats[seat.index()];
        seated.dice = seated.dice.saturating_sub(1);
        if seated.dice == 0 {
            seated.hand = Hand::EMPTY;
        }
    }

    fn eliminate(&mut self, seat: Seat) {
        let seated = &mut self.seats[seat.index()];
        seated.dice = 0;
        seated.hand = Hand::EMPTY;
    }

    fn snapshot(&self, seat: Seat) -> Player {
        let seated = &self.seats[seat.index()];
        Player {
            id: seated.id.clone(),
            seat,
            dice: seated.dice,
            hand: seated.hand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{pending, started};
    use super::*;
    use crate::core::{Bid, Face, Rules};

    #[test]
    fn test_add_assigns_seats_in_order() {
        let mut game = Game::with_seed(Rules::default(), 42);

        assert_eq!(game.add("ann").unwrap(), Seat::new(0));
        assert_eq!(game.add("bo").unwrap(), Seat::new(1));
        assert_eq!(game.add(String::from("cy")).unwrap(), Seat::new(2));

        let ids: Vec<_> = game.players().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlayerId::from("ann"), PlayerId::from("bo"), PlayerId::from("cy")]);
    }

    #[test]
    fn test_add_gives_starting_dice() {
        let game = pending(&["ann", "bo"], Rules::new(4), std::iter::empty());

        let ann = game.player("ann").unwrap();
        assert_eq!(ann.dice, 4);
        assert_eq!(ann.hand, Hand::EMPTY);
        assert_eq!(game.total_dice(), 8);
    }

    #[test]
    fn test_add_duplicate() {
        let mut game = pending(&["ann"], Rules::default(), std::iter::empty());

        assert_eq!(
            game.add("ann"),
            Err(GameError::AlreadyExists(PlayerId::from("ann")))
        );
        assert_eq!(game.player_count(), 1);
    }

    #[test]
    fn test_add_after_start() {
        let mut game = started(&["ann", "bo"], Rules::new(1), [0, 0]);

        assert_eq!(game.add("cy"), Err(GameError::AlreadyStarted));
        assert!(!game.exists("cy"));
    }

    #[test]
    fn test_exists_and_player() {
        let game = pending(&["ann"], Rules::default(), std::iter::empty());

        assert!(game.exists("ann"));
        assert!(!game.exists("bo"));
        assert_eq!(
            game.player("bo"),
            Err(GameError::NotExist(PlayerId::from("bo")))
        );
        assert_eq!(game.seat_of("ann"), Ok(Seat::new(0)));
    }

    #[test]
    fn test_forfeit_unknown_player() {
        let mut game = started(&["ann", "bo"], Rules::new(1), [0, 0]);

        assert_eq!(
            game.forfeit("zed"),
            Err(GameError::NotExist(PlayerId::from("zed")))
        );
    }

    #[test]
    fn test_forfeit_already_lost() {
        let mut game = started(&["ann", "bo", "cy"], Rules::new(1), [0; 3]);
        game.forfeit("bo").unwrap();

        assert_eq!(
            game.forfeit("bo"),
            Err(GameError::AlreadyLost(PlayerId::from("bo")))
        );
    }

    #[test]
    fn test_forfeit_by_bidder_passes_lead() {
        let mut game = started(&["ann", "bo", "cy"], Rules::new(2), [0; 6]);
        game.bid("ann", 1, 3).unwrap();
        assert_eq!(game.bidder().map(PlayerId::as_str), Some("bo"));

        game.forfeit("bo").unwrap();

        assert_eq!(game.phase(), Phase::RoundStart);
        assert_eq!(game.round(), 2);
        assert_eq!(game.current_bid(), Bid::NONE);
        assert_eq!(game.bidder().map(PlayerId::as_str), Some("cy"));
        assert_eq!(game.player("bo").unwrap().dice, 0);
        assert_eq!(game.player("bo").unwrap().hand, Hand::EMPTY);
    }

    #[test]
    fn test_forfeit_by_other_passes_lead_after_bidder() {
        let mut game = started(&["ann", "bo", "cy"], Rules::new(2), [0; 6]);
        assert_eq!(game.bidder().map(PlayerId::as_str), Some("ann"));

        game.forfeit("cy").unwrap();

        assert_eq!(game.round(), 2);
        assert_eq!(game.bidder().map(PlayerId::as_str), Some("bo"));
    }

    #[test]
    fn test_forfeit_lead_skips_forfeiting_player() {
        let mut game = started(&["ann", "bo", "cy", "di"], Rules::new(1), [0; 4]);
        game.bid("ann", 1, 0).unwrap();

        game.forfeit("cy").unwrap();

        // bo was to bid; the seat after bo is cy, who just left.
        assert_eq!(game.bidder().map(PlayerId::as_str), Some("di"));
    }

    #[test]
    fn test_forfeit_rerolls_remaining_hands() {
        let mut game = started(&["ann", "bo", "cy"], Rules::new(2), [0; 6]);
        game.rng = Box::new(crate::core::ScriptedRng::new([5, 5, 4, 4]));

        game.forfeit("cy").unwrap();

        assert_eq!(game.player("ann").unwrap().hand[Face::SIX], 2);
        assert_eq!(game.player("bo").unwrap().hand[Face::FIVE], 2);
    }

    #[test]
    fn test_forfeit_to_last_player_ends_game() {
        let mut game = started(&["ann", "bo"], Rules::new(2), [0; 4]);

        assert_eq!(game.forfeit("ann"), Err(GameError::NoBidder));

        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.player("ann").unwrap().dice, 0);
        assert_eq!(game.history().last().map(|r| &r.action), Some(&Action::Forfeit));
        assert_eq!(game.winner().map(PlayerId::as_str), Some("bo"));

        let round = game.round();
        assert_eq!(game.forfeit("bo"), Err(GameError::NoBidder));
        assert_eq!(game.player("bo").unwrap().dice, 2);
        assert_eq!(game.round(), round);
    }

    #[test]
    fn test_forfeit_before_start() {
        let mut game = pending(&["ann", "bo", "cy"], Rules::new(2), std::iter::empty());

        game.forfeit("cy").unwrap();

        assert_eq!(game.phase(), Phase::Pending);
        assert_eq!(game.players_with_dice(), 2);
        assert_eq!(game.history()[0].action, Action::Forfeit);
    }
}
