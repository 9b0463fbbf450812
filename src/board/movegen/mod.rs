//! Pseudo-legal move generation.
//!
//! Generation is a pure function of the position and the square asked
//! about: it reads the piece standing there (whichever side owns it) and
//! reports candidate destinations with the facts the executor needs
//! (captures, double steps, en passant, castling). Nothing is mutated.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Candidate, MoveKind, PieceKind, Position, Side, Square};

/// What the generator is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenMode {
    /// Squares a piece threatens: pawns only diagonally, sliders include the
    /// first occupied square whoever owns it, no castling, no en passant.
    Attack,
    /// Moves obeying movement geometry and blocking, castling included,
    /// not yet checked against leaving the own king attacked.
    Legality,
}

impl Position {
    /// Pseudo-legal destinations of the piece on `from`.
    ///
    /// Empty when `from` is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Square> {
        self.candidates(from, GenMode::Legality)
            .into_iter()
            .map(|candidate| candidate.to)
            .collect()
    }

    /// Generated destinations of the piece on `from`, with their kinds.
    #[must_use]
    pub fn candidates(&self, from: Square, mode: GenMode) -> Vec<Candidate> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let side = piece.side();
        let mut out = Vec::new();

        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_moves(from, side, mode, &mut out),
            PieceKind::Knight => self.generate_knight_moves(from, side, mode, &mut out),
            PieceKind::Bishop => {
                self.generate_slider_moves(from, side, &BISHOP_DIRECTIONS, mode, &mut out);
            }
            PieceKind::Rook => {
                self.generate_slider_moves(from, side, &ROOK_DIRECTIONS, mode, &mut out);
            }
            PieceKind::Queen => {
                self.generate_slider_moves(from, side, &QUEEN_DIRECTIONS, mode, &mut out);
            }
            PieceKind::King => {
                self.generate_king_moves(from, side, mode, &mut out);
                if mode == GenMode::Legality {
                    self.generate_castling_moves(from, piece, &mut out);
                }
            }
        }

        log::trace!("{} on {from}: {} candidates ({mode:?})", piece, out.len());
        out
    }

    /// Candidate for a knight, king or slider landing on `to`. `None` when
    /// `to` holds a friendly piece, except in attack mode.
    fn step_candidate(&self, to: Square, side: Side, mode: GenMode) -> Option<Candidate> {
        match self.piece_at(to) {
            None => Some(Candidate::new(to, MoveKind::Quiet)),
            Some(piece) if piece.side() != side => Some(Candidate::new(to, MoveKind::Capture)),
            Some(_) if mode == GenMode::Attack => Some(Candidate::new(to, MoveKind::Quiet)),
            Some(_) => None,
        }
    }
}
