//! Core chess types.
//!
//! This module contains the value types the rules engine is built from:
//! - `PieceKind`, `Side` and `Piece` - what stands on a square
//! - `Square` - a (file, rank) coordinate
//! - `Move` - a requested move, and `Candidate`/`MoveKind` - generated ones
//! - `GameOverReason` - terminal states

mod moves;
mod outcome;
mod piece;
mod square;

pub use moves::{Candidate, Move, MoveKind};
pub use outcome::GameOverReason;
pub use piece::{Piece, PieceKind, Side};
pub use square::Square;
