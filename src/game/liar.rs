//! Challenging the standing bid.
//!
//! The bid's face and every wild face are counted across all hands. A face
//! that is itself wild is counted once. If fewer dice match than the bid
//! claims, the bidder lied and loses a die; otherwise the challenger loses
//! one. The loser leads the next round, or the next player with dice if the
//! loser was just eliminated.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Game, Phase};
use crate::core::{Action, Bid, FaceSet, GameError, PlayerId};

/// How a Liar call resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiarResult {
    /// The challenged bid was a lie.
    pub lying: bool,

    /// Player who called Liar.
    pub accuser: PlayerId,

    /// Player who made the challenged bid.
    pub accused: PlayerId,

    /// The challenged bid.
    pub bid: Bid,

    /// Dice that actually matched the bid, wilds included.
    pub count: u32,

    /// Player who lost a die.
    pub loser: PlayerId,

    /// The loser has no dice left.
    pub eliminated: bool,

    /// Only one player has dice left.
    pub game_over: bool,
}

impl Game {
    /// Call Liar on the standing bid on behalf of `id`.
    ///
    /// Only the player whose turn it is may call, and only once a bid has
    /// been made this round.
    pub fn liar(&mut self, id: &str) -> Result<LiarResult, GameError> {
        let accuser = self.require_turn(id)?;
        let accused = self.prev.ok_or(GameError::NoBid)?;

        let bid = self.bid;
        let counted = FaceSet::single(bid.face()).union(self.rules.wilds);
        let count = self.count(counted);
        let lying = count < bid.quantity();
        let loser = if lying { accused } else { accuser };

        self.record(accuser, Action::Liar);
        self.phase = Phase::LiarCalled;
        self.remove_die(loser);

        let result = LiarResult {
            lying,
            accuser: self.seats[accuser.index()].id.clone(),
            accused: self.seats[accused.index()].id.clone(),
            bid,
            count,
            loser: self.seats[loser.index()].id.clone(),
            eliminated: self.seats[loser.index()].dice == 0,
            game_over: self.players_with_dice() <= 1,
        };
        info!(
            accuser = %result.accuser,
            accused = %result.accused,
            bid = %bid,
            count,
            lying,
            loser = %result.loser,
            "liar called"
        );

        self.next_round_from(loser)?;
        Ok(result)
    }
}
