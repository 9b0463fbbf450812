//! Collaborators a [`Game`](super::Game) talks to while it runs.

use crate::board::{GameOverReason, Move, MoveError, Position, Side};

pub use crate::board::PromotionChooser;

/// Where moves come from: a keyboard, a script, a random mover.
pub trait MoveSource {
    /// The next move for the side to move in `position`.
    ///
    /// `move_number` counts accepted plies from 1. `None` ends the game
    /// without a result.
    fn next_move(&mut self, position: &Position, move_number: u32) -> Option<Move>;

    /// The move just returned was refused; the same question follows.
    fn rejected(&mut self, _error: &MoveError) {}
}

/// Shows positions as the game progresses.
pub trait Presenter {
    fn present(&mut self, position: &Position);

    /// `side` was left in check by the move just played.
    fn check(&mut self, _side: Side) {}
}

pub trait GameOverReporter {
    /// `side_to_move` is the side that could not move on after the end
    /// (the loser on checkmate).
    fn report(&mut self, reason: GameOverReason, side_to_move: Side);
}
