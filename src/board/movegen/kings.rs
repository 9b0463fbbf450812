use super::super::attack_tables::KING_TARGETS;
use super::super::{Candidate, MoveKind, Piece, PieceKind, Position, Side, Square};
use super::GenMode;

/// Files a castling rook may start from.
const ROOK_FILES: [usize; 2] = [0, 7];

impl Position {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        side: Side,
        mode: GenMode,
        out: &mut Vec<Candidate>,
    ) {
        out.extend(
            KING_TARGETS[from.index()]
                .iter()
                .filter_map(|&to| self.step_candidate(to, side, mode)),
        );
    }

    /// Castling toward either corner rook of the king's rank.
    ///
    /// King and rook must both be unmoved, everything between them empty, and
    /// the king may not start on, cross or land on an attacked square.
    pub(crate) fn generate_castling_moves(
        &self,
        from: Square,
        king: Piece,
        out: &mut Vec<Candidate>,
    ) {
        if king.has_moved() {
            return;
        }
        let side = king.side();
        let enemy = side.opposite();

        if self.is_square_attacked(from, enemy) {
            return;
        }

        for rook_file in ROOK_FILES {
            let Some(rook_from) = Square::new(rook_file, from.rank()) else {
                continue;
            };
            let rook_ok = self.piece_at(rook_from).is_some_and(|rook| {
                rook.side() == side && rook.kind() == PieceKind::Rook && !rook.has_moved()
            });
            if !rook_ok || rook_file.abs_diff(from.file()) < 3 {
                continue;
            }

            let step: i8 = if rook_file > from.file() { 1 } else { -1 };
            let (lo, hi) = (from.file().min(rook_file), from.file().max(rook_file));
            let path_clear = (lo + 1..hi)
                .filter_map(|file| Square::new(file, from.rank()))
                .all(|sq| self.is_empty(sq));
            if !path_clear {
                continue;
            }

            let (Some(crossed), Some(to)) = (from.offset(step, 0), from.offset(2 * step, 0)) else {
                continue;
            };
            if self.is_square_attacked(crossed, enemy) || self.is_square_attacked(to, enemy) {
                continue;
            }

            out.push(Candidate::new(
                to,
                MoveKind::Castle {
                    rook_from,
                    rook_to: crossed,
                },
            ));
        }
    }
}
