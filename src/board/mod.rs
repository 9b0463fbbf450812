//! Board model and the rules of chess.
//!
//! A [`Position`] is an immutable value: a mailbox of pieces plus the side to
//! move, the en passant target, the fifty-move counter and a game-over
//! marker. Move generation, legality and execution are all methods on it and
//! every transition returns a new position.
//!
//! # Example
//! ```
//! use chess_rules::board::{Move, Position};
//!
//! let position = Position::new();
//! let mv: Move = "e2-e4".parse().unwrap();
//! let next = position.apply(mv).unwrap();
//! assert_eq!(next.en_passant_target(), Some("e3".parse().unwrap()));
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod display;
mod error;
mod legality;
mod make_move;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use display::BoardStyle;
pub use error::{MoveError, MoveParseError, PieceKindParseError, SquareError};
pub use make_move::{PromotionChooser, FIFTY_MOVE_LIMIT};
pub use movegen::GenMode;
pub use state::Position;
pub use types::{Candidate, GameOverReason, Move, MoveKind, Piece, PieceKind, Side, Square};
