//! Attack queries: which squares a side threatens, independent of turn rules.

use super::attack_tables::{ray, BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::movegen::GenMode;
use super::{PieceKind, Position, Side, Square};

impl Position {
    /// Returns true if any piece of `by` attacks `square`.
    ///
    /// Pawns attack diagonally forward only, sliders are blocked by the
    /// first occupied square. En passant and castling play no part.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Side) -> bool {
        let holds = |sq: Square, kinds: &[PieceKind]| {
            self.piece_at(sq)
                .is_some_and(|piece| piece.side() == by && kinds.contains(&piece.kind()))
        };

        // A pawn of `by` attacks one rank ahead of itself, so look one rank behind.
        let pawn_rank_step = -by.forward();
        if [-1, 1]
            .into_iter()
            .filter_map(|df| square.offset(df, pawn_rank_step))
            .any(|sq| holds(sq, &[PieceKind::Pawn]))
        {
            return true;
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| holds(sq, &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| holds(sq, &[PieceKind::King]))
        {
            return true;
        }

        let first_blocker =
            |direction: (i8, i8)| ray(square, direction).find(|&sq| !self.is_empty(sq));

        let rook_like = [PieceKind::Rook, PieceKind::Queen];
        if ROOK_DIRECTIONS
            .into_iter()
            .filter_map(first_blocker)
            .any(|sq| holds(sq, &rook_like))
        {
            return true;
        }

        let bishop_like = [PieceKind::Bishop, PieceKind::Queen];
        BISHOP_DIRECTIONS
            .into_iter()
            .filter_map(first_blocker)
            .any(|sq| holds(sq, &bishop_like))
    }

    /// Squares the piece on `from` attacks (empty if `from` is empty).
    #[must_use]
    pub fn attacked_squares(&self, from: Square) -> Vec<Square> {
        self.candidates(from, GenMode::Attack)
            .into_iter()
            .map(|candidate| candidate.to)
            .collect()
    }

    #[must_use]
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Returns true if `side` has a king and it is attacked.
    #[must_use]
    pub fn is_in_check(&self, side: Side) -> bool {
        self.king_square(side)
            .is_some_and(|king| self.is_square_attacked(king, side.opposite()))
    }
}
