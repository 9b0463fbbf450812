//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal generation and attack sets
//! - `special_moves.rs` - En passant, castling and promotion
//! - `make_move.rs` - Move execution and its invariants
//! - `draw.rs` - Fifty-move rule, repetition, checkmate and stalemate
//! - `proptest.rs` - Property-based tests over random games
//! - `serde_round_trip.rs` - Serialization of the model types (`serde` feature)

mod draw;

use crate::board::{Move, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn mv(s: &str) -> Move {
    s.parse().expect("valid move")
}

/// Apply each move in turn with queen promotion.
pub(super) fn play_line(position: &Position, moves: &[&str]) -> Position {
    moves.iter().fold(position.clone(), |current, text| {
        current
            .apply(mv(text))
            .unwrap_or_else(|err| panic!("{text} rejected: {err}"))
    })
}

pub(super) fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort_by_key(|sq| sq.index());
    squares
}
