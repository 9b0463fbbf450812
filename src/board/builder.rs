//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, which is how test fixtures and
//! composed problems are set up.
//!
//! # Example
//! ```
//! use chess_rules::board::{PositionBuilder, PieceKind, Side, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Side::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Side::Black, PieceKind::King)
//!     .piece("a2".parse().unwrap(), Side::White, PieceKind::Pawn)
//!     .side_to_move(Side::White)
//!     .build();
//! assert_eq!(position.piece_count(), 3);
//! ```

use super::{Piece, PieceKind, Position, Side, Square};

/// A fluent builder for constructing `Position` values.
///
/// The engine only guarantees one king per side for positions it reaches
/// itself; a builder can produce anything.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Side,
    en_passant_target: Option<Square>,
    moves_since_capture_or_pawn_move: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Side::White,
            en_passant_target: None,
            moves_since_capture_or_pawn_move: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Position::new().pieces().collect();
        builder
    }

    /// Place an unmoved piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.place(square, Piece::new(side, kind))
    }

    /// Place a piece that counts as having moved (no castling with it).
    #[must_use]
    pub fn moved_piece(self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.place(square, Piece::new(side, kind).moved())
    }

    fn place(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the counter of plies without capture or pawn move.
    #[must_use]
    pub const fn moves_since_capture_or_pawn_move(mut self, plies: u32) -> Self {
        self.moves_since_capture_or_pawn_move = plies;
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();

        for (square, piece) in self.pieces {
            position.put(square, Some(piece));
        }

        position.side_to_move = self.side_to_move;
        position.en_passant_target = self.en_passant_target;
        position.moves_since_capture_or_pawn_move = self.moves_since_capture_or_pawn_move;

        position
    }
}
