//! Errors returned by session operations.
//!
//! Every failing check aborts the operation before anything is mutated, so
//! an `Err` leaves the session exactly as it was. `NoBidder` from a forfeit
//! is the exception: the forfeit has been applied and the game is over.

use thiserror::Error;

use super::player::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player {0} does not exist")]
    NotExist(PlayerId),
    #[error("player {0} already exists")]
    AlreadyExists(PlayerId),
    #[error("player {0} already lost")]
    AlreadyLost(PlayerId),
    #[error("action attempted by {player} while it is {bidder}'s turn")]
    OutOfTurn { player: PlayerId, bidder: PlayerId },
    #[error("bid face {0} is not a die face")]
    InvalidFace(u32),
    #[error("bid quantity {quantity} exceeds the {dice} dice in play")]
    InvalidQuantity { quantity: u32, dice: u32 },
    /// Carries the standing bid so the caller can report what to beat.
    #[error("bid too low: must beat {quantity} × face {face}")]
    BidTooLow { quantity: u32, face: u32 },
    #[error("no valid bidder found")]
    NoBidder,
    #[error("not enough players to start the round")]
    NotEnoughPlayers,
    #[error("seat {0} is not at the table")]
    NoSuchSeat(usize),
    #[error("game has not started")]
    NotStarted,
    #[error("game already started")]
    AlreadyStarted,
    #[error("no bid has been made this round")]
    NoBid,
}

impl GameError {
    /// True when the error means the game has reached its terminal state.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameError::NoBidder)
    }
}
