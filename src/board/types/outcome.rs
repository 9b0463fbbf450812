//! Terminal game states.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Side;

/// Why a game ended. Once a position carries one of these, no further moves
/// are accepted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOverReason {
    /// The side to move has no legal move and its king is attacked
    Checkmate,
    /// The side to move has no legal move and is not in check
    Stalemate,
    /// Fifty plies without a capture or a pawn move
    FiftyMove,
    /// The same placement and side to move occurred for the third time
    ThreefoldRepetition,
}

impl GameOverReason {
    /// The winning side, given the side to move in the final position.
    ///
    /// Only checkmate has a winner: the side that delivered it.
    #[must_use]
    pub const fn winner(self, side_to_move: Side) -> Option<Side> {
        match self {
            GameOverReason::Checkmate => Some(side_to_move.opposite()),
            GameOverReason::Stalemate
            | GameOverReason::FiftyMove
            | GameOverReason::ThreefoldRepetition => None,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        !matches!(self, GameOverReason::Checkmate)
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::Checkmate => write!(f, "checkmate"),
            GameOverReason::Stalemate => write!(f, "stalemate"),
            GameOverReason::FiftyMove => write!(f, "fifty-move rule"),
            GameOverReason::ThreefoldRepetition => write!(f, "threefold repetition"),
        }
    }
}
