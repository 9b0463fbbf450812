//! Legality filter: pseudo-legal candidates that do not leave the mover's
//! own king attacked.

use super::movegen::GenMode;
use super::{Candidate, Move, MoveKind, Piece, PieceKind, Position, Square};

impl Position {
    /// Legal destinations of the piece on `from`, judged for that piece's own
    /// side. Empty when `from` is empty.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.legal_candidates(from)
            .into_iter()
            .map(|candidate| candidate.to)
            .collect()
    }

    pub(crate) fn legal_candidates(&self, from: Square) -> Vec<Candidate> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let side = piece.side();
        let enemy = side.opposite();

        let mut candidates = self.candidates(from, GenMode::Legality);
        if piece.kind() == PieceKind::King {
            // Castling already checked its own squares.
            candidates.retain(|c| c.is_castle() || !self.is_square_attacked(c.to, enemy));
        }

        candidates.retain(|candidate| {
            let mut scratch = self.clone();
            scratch.relocate(from, candidate);
            !scratch.is_in_check(side)
        });

        log::trace!("{piece} on {from}: {} legal", candidates.len());
        candidates
    }

    /// Every legal move of the side to move. Pawn moves onto the last rank
    /// appear once per promotion choice.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move;
        let mut moves = Vec::new();

        for (from, piece) in self.pieces_of(side) {
            for candidate in self.legal_candidates(from) {
                let promotes = piece.kind() == PieceKind::Pawn
                    && candidate.to.rank() == side.promotion_rank();
                if promotes {
                    moves.extend(
                        PieceKind::PROMOTION_CHOICES
                            .iter()
                            .map(|&kind| Move::with_promotion(from, candidate.to, kind)),
                    );
                } else {
                    moves.push(Move::new(from, candidate.to));
                }
            }
        }
        moves
    }

    /// Returns true if the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.pieces_of(self.side_to_move)
            .any(|(from, _)| !self.legal_candidates(from).is_empty())
    }

    /// Carry out the board side of `candidate` for the piece on `from`:
    /// relocate it (marked moved), remove an en passant victim, bring the
    /// castling rook along. Returns the captured piece, if any.
    ///
    /// Counters, promotion and the side to move are left to the caller.
    pub(crate) fn relocate(&mut self, from: Square, candidate: &Candidate) -> Option<Piece> {
        let piece = self.take(from)?;
        let mut captured = self.take(candidate.to);

        match candidate.kind {
            MoveKind::EnPassant { captured: victim } => {
                captured = self.take(victim);
            }
            MoveKind::Castle { rook_from, rook_to } => {
                let rook = self.take(rook_from).map(Piece::moved);
                self.put(rook_to, rook);
            }
            MoveKind::Quiet | MoveKind::Capture | MoveKind::DoublePush { .. } => {}
        }

        self.put(candidate.to, Some(piece.moved()));
        captured
    }
}
